// Certificate Reader - Load a PEM file from disk and parse its certificate

use crate::Result;
use crate::error::CheckerError;
use chrono::{DateTime, Utc};
use std::path::Path;
use x509_parser::pem::{Pem, parse_x509_pem};
use x509_parser::prelude::*;

/// Fields of an X.509 certificate relevant to expiry reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCertificate {
    /// DNS names from the Subject Alternative Name extension
    pub subjects: Vec<String>,
    pub not_after: DateTime<Utc>,
}

/// Read the certificate stored at `path`.
///
/// The whole file is loaded, the first PEM block decoded and its payload
/// parsed as a single X.509 certificate. Additional blocks are ignored.
/// The file handle is closed before this returns, on success or failure.
pub async fn read_certificate(path: &Path) -> Result<ParsedCertificate> {
    let data = tokio::fs::read(path).await.map_err(|source| CheckerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_pem_certificate(&data, path)
}

/// Decode the first PEM block of `data` and parse it as a certificate.
///
/// `path` is only used for error reporting.
pub fn parse_pem_certificate(data: &[u8], path: &Path) -> Result<ParsedCertificate> {
    let pem = decode_pem(data, path)?;
    parse_der_certificate(&pem.contents, path)
}

const PEM_BEGIN: &[u8] = b"-----BEGIN ";

/// Decode the first well-formed PEM block.
///
/// A block starts with `-----BEGIN ` at the beginning of the input or of a
/// line; bytes before it are skipped. A block that fails to decode is skipped
/// and the search resumes after its marker. The file holds no block when
/// nothing decodes, i.e. the remainder is the whole input.
pub fn decode_pem(data: &[u8], path: &Path) -> Result<Pem> {
    let mut search_from = 0;
    while let Some(start) = find_pem_begin(data, search_from) {
        match parse_x509_pem(&data[start..]) {
            Ok((remainder, pem)) if remainder.len() != data.len() => return Ok(pem),
            _ => search_from = start + PEM_BEGIN.len(),
        }
    }

    Err(CheckerError::InvalidPem {
        path: path.to_path_buf(),
    })
}

/// Offset of the next line-leading `-----BEGIN ` marker at or after `from`
fn find_pem_begin(data: &[u8], from: usize) -> Option<usize> {
    let mut from = from;
    while from < data.len() {
        let found = data[from..]
            .windows(PEM_BEGIN.len())
            .position(|window| window == PEM_BEGIN)?;
        let start = from + found;
        if start == 0 || data[start - 1] == b'\n' {
            return Some(start);
        }
        from = start + 1;
    }
    None
}

/// Parse a DER-encoded certificate
pub fn parse_der_certificate(der: &[u8], path: &Path) -> Result<ParsedCertificate> {
    let parse_error = |details: String| CheckerError::Parse {
        path: path.to_path_buf(),
        details,
    };

    let (trailing, cert) =
        X509Certificate::from_der(der).map_err(|e| parse_error(format!("{:?}", e)))?;
    if !trailing.is_empty() {
        return Err(parse_error(format!(
            "{} trailing byte(s) after certificate",
            trailing.len()
        )));
    }

    let subjects = extract_dns_names(&cert).map_err(|e| parse_error(e.to_string()))?;

    let not_after_ts = cert.validity().not_after.timestamp();
    let not_after = DateTime::<Utc>::from_timestamp(not_after_ts, 0)
        .ok_or_else(|| parse_error(format!("notAfter out of range: {}", not_after_ts)))?;

    Ok(ParsedCertificate {
        subjects,
        not_after,
    })
}

fn extract_dns_names(cert: &X509Certificate) -> std::result::Result<Vec<String>, X509Error> {
    let mut names = Vec::new();
    if let Some(san) = cert.subject_alternative_name()? {
        for name in &san.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                names.push(dns.to_string());
            }
        }
    }
    Ok(names)
}
