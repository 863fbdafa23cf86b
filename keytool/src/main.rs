use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use keytool::convert_certificate;
use keytool::params::DEFAULT_KEY_SIZE;

fn print_usage() {
    eprintln!("Usage: cert-to-verity-key <path-to-cert> <path-to-key>");
}

fn main() -> ExitCode {
    let mut args = env::args_os().skip(1);
    let (Some(cert_path), Some(out_path), None) =
        (args.next(), args.next(), args.next())
    else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match convert_certificate(
        &PathBuf::from(cert_path),
        &PathBuf::from(out_path),
        DEFAULT_KEY_SIZE,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cert-to-verity-key: {err}");
            ExitCode::FAILURE
        }
    }
}
