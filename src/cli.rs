//! Command-line front end of the `cryptal-sha256` binary
//!
//! With no inputs the demonstration message is hashed and printed as
//! `SHA-256 Hash: <hex>`. Otherwise every `--text` string and every
//! positional input is hashed and printed as `<hex>  <label>`, in that
//! order. `--check` turns any digest that differs from the expected one
//! into an error.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};

use crate::hash::sha256;
use crate::input::{os_arg_bytes, read_message};
use crate::primitives::Digest;

/// Message hashed when no input is given.
pub const DEMO_MESSAGE: &str = "Hello, SHA-256!";

#[derive(Debug, Parser)]
#[command(name = "cryptal-sha256", about = "Compute SHA-256 digests")]
pub struct Args {
    /// Files to hash, read whole. `-` reads standard input.
    ///
    /// With `--raw-args` these are hashed as messages instead.
    pub inputs: Vec<OsString>,

    /// Hash a string's UTF-8 bytes (repeatable).
    #[arg(long = "text", short = 't')]
    pub texts: Vec<String>,

    /// Hash the positional arguments' own bytes rather than treating them as paths.
    #[arg(long)]
    pub raw_args: bool,

    /// Expected digest; exit with an error if any computed digest differs.
    #[arg(long, env = "CRYPTAL_EXPECT")]
    pub check: Option<Digest>,
}

/// One computed digest and the label it is printed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashed {
    pub label: String,
    pub digest: Digest,
}

/// Hashes every input named by `args`, texts first.
///
/// `stdin` is read for the `-` path.
pub fn collect<R: Read>(args: &Args, mut stdin: R) -> Result<Vec<Hashed>> {
    let mut out = Vec::with_capacity(args.texts.len() + args.inputs.len());

    for text in &args.texts {
        out.push(Hashed {
            label: format!("{text:?}"),
            digest: sha256(text.as_bytes()),
        });
    }

    for (index, input) in args.inputs.iter().enumerate() {
        let label = input.to_string_lossy().into_owned();

        let message = if args.raw_args {
            os_arg_bytes(index, input)?
        } else {
            read_message(Path::new(input), &mut stdin)
                .with_context(|| format!("hashing {label}"))?
        };

        debug!(input = %label, len = message.len(), "hashing");
        out.push(Hashed {
            label,
            digest: sha256(&message),
        });
    }

    Ok(out)
}

/// Fails on the first digest that differs from `expected`.
pub fn verify(expected: Option<&Digest>, hashed: &[Hashed]) -> Result<()> {
    let Some(expected) = expected else {
        return Ok(());
    };

    for h in hashed {
        if h.digest != *expected {
            bail!(
                "digest mismatch for {}: expected {expected}, got {}",
                h.label,
                h.digest
            );
        }
    }

    info!(count = hashed.len(), "all digests match");
    Ok(())
}

/// Hashes, prints to `out`, then verifies.
pub fn run<R: Read, W: Write>(args: &Args, stdin: R, out: &mut W) -> Result<()> {
    if args.inputs.is_empty() && args.texts.is_empty() {
        let digest = sha256(DEMO_MESSAGE.as_bytes());
        writeln!(out, "SHA-256 Hash: {digest}")?;

        return verify(
            args.check.as_ref(),
            &[Hashed {
                label: format!("{DEMO_MESSAGE:?}"),
                digest,
            }],
        );
    }

    let hashed = collect(args, stdin)?;

    for h in &hashed {
        writeln!(out, "{}  {}", h.digest, h.label)?;
    }

    verify(args.check.as_ref(), &hashed)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const HELLO_HEX: &str = "d0e8b8f11c98f369016eb2ed3c541e1f01382f9d5b3104c9ffd06b6175a46271";

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cryptal-sha256").chain(argv.iter().copied()))
            .unwrap()
    }

    fn run_to_string(args: &Args, stdin: &[u8]) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(args, io::Cursor::new(stdin.to_vec()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn demo_line_hashes_hello_message() {
        let (result, out) = run_to_string(&parse(&[]), b"");

        result.unwrap();
        assert_eq!(out, format!("SHA-256 Hash: {HELLO_HEX}\n"));
    }

    #[test]
    fn demo_respects_check() {
        let (result, _) = run_to_string(&parse(&["--check", ABC_HEX]), b"");
        assert!(result.is_err());

        let (result, _) = run_to_string(&parse(&["--check", HELLO_HEX]), b"");
        result.unwrap();
    }

    #[test]
    fn text_lines_quote_the_label() {
        let (result, out) = run_to_string(&parse(&["-t", "abc"]), b"");

        result.unwrap();
        assert_eq!(out, format!("{ABC_HEX}  \"abc\"\n"));
    }

    #[test]
    fn file_lines_show_the_path() {
        let path = std::env::temp_dir().join(format!("cryptal-cli-{}.txt", std::process::id()));
        fs::write(&path, b"abc").unwrap();
        let shown = path.to_string_lossy().into_owned();

        let (result, out) = run_to_string(&parse(&[shown.as_str()]), b"");
        fs::remove_file(&path).unwrap();

        result.unwrap();
        assert_eq!(out, format!("{ABC_HEX}  {shown}\n"));
    }

    #[test]
    fn dash_hashes_stdin() {
        let (result, out) = run_to_string(&parse(&["-"]), b"abc");

        result.unwrap();
        assert_eq!(out, format!("{ABC_HEX}  -\n"));
    }

    #[test]
    fn raw_args_hash_the_argument_itself() {
        let (result, out) = run_to_string(&parse(&["--raw-args", "abc"]), b"");

        result.unwrap();
        assert_eq!(out, format!("{ABC_HEX}  abc\n"));
    }

    #[test]
    fn check_passes_when_all_inputs_match() {
        let (result, _) = run_to_string(&parse(&["-t", "abc", "--check", ABC_HEX]), b"");
        result.unwrap();
    }

    #[test]
    fn check_fails_on_any_mismatch_among_several_inputs() {
        let args = parse(&["-", "-t", "x", "--check", ABC_HEX]);
        let (result, out) = run_to_string(&args, b"abc");

        let err = result.unwrap_err().to_string();
        assert!(err.contains("digest mismatch for \"x\""), "{err}");
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn verify_rejects_mismatch() {
        let expected: Digest = ABC_HEX.parse().unwrap();
        let hashed = [Hashed {
            label: "empty".to_string(),
            digest: sha256(b""),
        }];

        assert!(verify(Some(&expected), &hashed).is_err());
        assert!(verify(None, &hashed).is_ok());
    }

    #[test]
    fn malformed_check_is_rejected_by_parser() {
        let argv = ["cryptal-sha256", "--check", "00"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let args = parse(&["definitely/not/here.bin"]);
        let err = collect(&args, io::empty()).unwrap_err();

        assert!(format!("{err:#}").contains("definitely/not/here.bin"));
    }
}
