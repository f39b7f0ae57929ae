use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn classicrypt_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_classicrypt"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(classicrypt_command().args(args).output()?)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn encode_then_decode_each_cipher() -> Result<(), Box<dyn Error>> {
    let cases: [(&str, &[&str], &str); 5] = [
        ("caesar", &["--shift", "3"], "Khoor, Zruog!"),
        ("atbash", &[], "Svool, Dliow!"),
        ("vigenere", &["--secret", "KEY"], "Rijvs, Uyvjn!"),
        ("alberti", &["--position", "3"], "Aufgl, Pmyld!"),
        ("playfair", &["--secret", "keyword"], "GyiZsc, Okcfd!"),
    ];

    for (cipher, params, expected) in cases {
        let mut args = vec!["encode", cipher, "Hello, World!"];
        args.extend_from_slice(params);
        let encoded = run(&args)?;
        assert!(
            encoded.status.success(),
            "{} encode failed: {}",
            cipher,
            String::from_utf8_lossy(&encoded.stderr)
        );
        assert_eq!(stdout_of(&encoded), format!("{}\n", expected));

        let mut args = vec!["decode", cipher, expected];
        args.extend_from_slice(params);
        let decoded = run(&args)?;
        assert!(decoded.status.success(), "{} decode failed", cipher);
        assert_eq!(stdout_of(&decoded), "Hello, World!\n");
    }
    Ok(())
}

#[test]
fn negative_shift_is_accepted() -> Result<(), Box<dyn Error>> {
    let output = run(&["encode", "caesar", "abc", "--shift", "-23"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "def\n");
    Ok(())
}

#[test]
fn reads_text_from_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("plain.txt");
    fs::write(&input, "HELLO\n")?;

    let output = run(&[
        "encode",
        "alberti",
        "--position",
        "3",
        "--input",
        input.to_str().unwrap(),
    ])?;
    assert!(
        output.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "AVGHM\n");
    Ok(())
}

#[test]
fn json_report() -> Result<(), Box<dyn Error>> {
    let output = run(&["encode", "vigenere", "Hello World!", "--secret", "KEY", "--json"])?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["cipher"], "vigenere");
    assert_eq!(value["direction"], "encode");
    assert_eq!(value["input"], "Hello World!");
    assert_eq!(value["output"], "Rijvs Uyvjn!");
    Ok(())
}

#[test]
fn invalid_input_fails_with_message() -> Result<(), Box<dyn Error>> {
    let output = run(&["encode", "atbash", ""])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid input"), "stderr: {}", stderr);

    let output = run(&["encode", "vigenere", "Hello"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--secret"));

    let output = run(&["encode", "enigma", "Hello"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn table_and_list_commands() -> Result<(), Box<dyn Error>> {
    let table = run(&["table"])?;
    assert!(table.status.success());
    assert!(stdout_of(&table).contains("Z | Z A B"));

    let list = run(&["list"])?;
    assert!(list.status.success());
    let listed = stdout_of(&list);
    assert!(listed.contains("Playfair Cipher"));
    assert!(listed.contains("Alberti Cipher"));
    Ok(())
}

#[test]
fn random_command_is_reproducible_with_seed() -> Result<(), Box<dyn Error>> {
    let first = run(&["random", "24", "--numbers", "--seed", "9"])?;
    let second = run(&["random", "24", "--numbers", "--seed", "9"])?;
    assert!(first.status.success());
    let text = stdout_of(&first);
    assert_eq!(text, stdout_of(&second));
    assert_eq!(text.trim_end().len(), 24);
    assert!(text.trim_end().chars().all(|c| c.is_ascii_alphanumeric()));
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("classicrypt "), "unexpected: {}", stdout);
    assert!(stdout.contains("build"));
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = run(&[])?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Usage"));
    Ok(())
}
