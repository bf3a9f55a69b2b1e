/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of Base32H.
 *
 * Base32H is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Base32H is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Base32H. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::str;

use anyhow::Context;
use clap::Parser;
use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

use base32h::{decode, decode_bin_bytes, encode, encode_bin_to_bytes};

/// Encodes or decodes Base32H data from FILE and writes the result to
/// standard output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Command {
    /// Decode data instead of encoding.
    #[arg(short, long)]
    decode: bool,

    /// Treat the input as whitespace-separated integers (decimal when
    /// encoding, Base32H when decoding) and write one result per line.
    #[arg(short, long)]
    number: bool,

    /// When encoding binary data, wrap lines after COLS characters.
    /// 0 disables wrapping.
    #[arg(short, long, value_name = "COLS", default_value_t = 0)]
    wrap: usize,

    /// File to read. Standard input is used if missing or "-".
    #[arg()]
    file: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => fs::read(path)
            .with_context(|| format!("could not read file '{}'", path.display())),
        _ => {
            let mut input = Vec::new();
            stdin()
                .lock()
                .read_to_end(&mut input)
                .context("could not read standard input")?;
            Ok(input)
        }
    }
}

fn encode_binary(
    input: &[u8],
    wrap: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let encoded: Vec<u8> = encode_bin_to_bytes(input.iter().copied()).collect();
    tracing::debug!(bytes = input.len(), digits = encoded.len(), "encoded");
    if wrap == 0 {
        return Ok(out.write_all(&encoded)?);
    }
    for line in encoded.chunks(wrap) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn decode_binary(input: &[u8], out: &mut impl Write) -> anyhow::Result<()> {
    let decoded: Vec<u8> = decode_bin_bytes(input.iter().copied()).collect();
    tracing::debug!(chars = input.len(), bytes = decoded.len(), "decoded");
    Ok(out.write_all(&decoded)?)
}

fn encode_numbers(input: &[u8], out: &mut impl Write) -> anyhow::Result<()> {
    let text = str::from_utf8(input).context("input is not valid UTF-8")?;
    for token in text.split_whitespace() {
        let n: BigInt = token
            .parse()
            .with_context(|| format!("not a decimal integer: {:?}", token))?;
        tracing::trace!(%n, "encoding number");
        writeln!(out, "{}", encode(&n))?;
    }
    Ok(())
}

fn decode_numbers(input: &[u8], out: &mut impl Write) -> anyhow::Result<()> {
    let text = str::from_utf8(input).context("input is not valid UTF-8")?;
    for token in text.split_whitespace() {
        let n = decode(token);
        tracing::trace!(token, %n, "decoded number");
        writeln!(out, "{}", n)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = Command::parse();
    tracing::debug!(
        decode = cmd.decode,
        number = cmd.number,
        file = ?cmd.file,
        "starting"
    );

    let input = read_input(cmd.file.as_deref())?;
    let mut writer = BufWriter::new(stdout().lock());
    match (cmd.number, cmd.decode) {
        (false, false) => encode_binary(&input, cmd.wrap, &mut writer),
        (false, true) => decode_binary(&input, &mut writer),
        (true, false) => encode_numbers(&input, &mut writer),
        (true, true) => decode_numbers(&input, &mut writer),
    }?;
    writer.flush().context("could not write to standard output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_round_trip_with_wrapping() {
        let mut encoded = Vec::new();
        encode_binary(b"Hello, world", 8, &mut encoded).unwrap();
        assert_eq!(encoded, b"00000J35\nDHN6YB10\nEXPP4V34\n");

        let mut decoded = Vec::new();
        decode_binary(&encoded, &mut decoded).unwrap();
        assert_eq!(decoded, b"\0\0\0Hello, world");
    }

    #[test]
    fn numbers() {
        let mut encoded = Vec::new();
        encode_numbers(b"0 31\n32 -1234", &mut encoded).unwrap();
        assert_eq!(encoded, b"0\nZ\n10\n16J\n");

        let mut decoded = Vec::new();
        decode_numbers(&encoded, &mut decoded).unwrap();
        assert_eq!(decoded, b"0\n31\n32\n1234\n");
    }

    #[test]
    fn bad_number() {
        let mut out = Vec::new();
        assert!(encode_numbers(b"12 twelve", &mut out).is_err());
        assert_eq!(out, b"C\n");
    }
}
