//! TLS credential loading and development certificate generation.
//!
//! Certificates and keys are PEM files on disk; PKCS#8, SEC1, and RSA private
//! keys are accepted.

use crate::error::EngineError;
use crate::options::TlsIdentity;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Build a rustls server configuration from a certificate/key pair.
pub(crate) fn build_server_config(
    identity: &TlsIdentity,
) -> Result<rustls::ServerConfig, EngineError> {
    let certs = load_certs(&identity.cert)?;
    let key = load_private_key(&identity.key)?;

    let mut config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(|e| EngineError::Tls(format!("certificate/key pair rejected: {e}")))?;
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];
    Ok(config)
}

/// Load certificates from a PEM file.
fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>, EngineError> {
    let file = File::open(path)
        .map_err(|e| EngineError::Tls(format!("cannot read certificate {}: {e}", path.display())))?;
    let mut reader = BufReader::new(file);

    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .collect::<Result<_, _>>()
        .map_err(|e| EngineError::Tls(format!("invalid certificate {}: {e}", path.display())))?;

    if certs.is_empty() {
        return Err(EngineError::Tls(format!(
            "no certificates found in {}",
            path.display()
        )));
    }
    Ok(certs)
}

/// Load a private key from a PEM file.
fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>, EngineError> {
    let file = File::open(path)
        .map_err(|e| EngineError::Tls(format!("cannot read private key {}: {e}", path.display())))?;
    let mut reader = BufReader::new(file);

    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| EngineError::Tls(format!("invalid private key {}: {e}", path.display())))?
        .ok_or_else(|| EngineError::Tls(format!("no private key found in {}", path.display())))
}

/// Generate a self-signed localhost certificate/key pair for development.
pub fn generate_self_signed(cert_path: &Path, key_path: &Path) -> Result<(), EngineError> {
    let subject_alt_names = vec!["localhost".to_string(), "127.0.0.1".to_string()];

    let certified = rcgen::generate_simple_self_signed(subject_alt_names)
        .map_err(|e| EngineError::Tls(format!("certificate generation failed: {e}")))?;

    std::fs::write(cert_path, certified.cert.pem())?;
    std::fs::write(key_path, certified.key_pair.serialize_pem())?;

    info!(
        cert = %cert_path.display(),
        key = %key_path.display(),
        "generated self-signed development certificate"
    );
    Ok(())
}
