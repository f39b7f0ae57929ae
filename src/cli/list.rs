use crate::kind::CipherKind;

/// Table of supported ciphers with their key parameter
pub fn list_ciphers() -> String {
    let mut output = String::new();
    output.push_str("Supported Ciphers\n");
    output.push_str("=================\n\n");
    for kind in CipherKind::ALL {
        output.push_str(&format!(
            "  {:<10} {:<17} {:<15} {}\n",
            kind.to_string(),
            kind.name(),
            kind.category(),
            kind.parameter().unwrap_or("-")
        ));
    }
    output
}
