/// Which page a profile share points back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    VerificationPage,
    CertificateFile,
}
