mod cli;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::exit;

use clap::{CommandFactory, ErrorKind, Parser};
use log::{debug, info};

use huffc::container::{read_container, write_container};
use huffc::HuffError;

use crate::cli::{Command, Options};

fn main() {
    let options = Options::parse();

    // RUST_LOG still wins over the default
    let default_level = if options.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    debug!("{:?}", options);

    let result = match options.cmd {
        Command::Encode => {
            let message = match (&options.input, options.message_from_words()) {
                (Some(path), _) => fs::read(path).map_err(HuffError::from),
                (None, Some(message)) => Ok(message),
                (None, None) => Options::command()
                    .error(
                        ErrorKind::MissingRequiredArgument,
                        "no input, pass a message or --input FILE",
                    )
                    .exit(),
            };
            message.and_then(|message| encode(&options, &message))
        }
        Command::Decode => match &options.input {
            Some(path) => decode(&options, path),
            None => Options::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "decode reads tree and message bits from --input FILE",
                )
                .exit(),
        },
    };

    if let Err(err) = result {
        eprintln!("huffc: {}", err);
        exit(10);
    }
}

fn encode(options: &Options, message: &[u8]) -> Result<(), HuffError> {
    let encoded = huffc::encode_message(message)?;

    if options.verbose {
        println!(
            "Message ({} bits): {}",
            8 * message.len(),
            String::from_utf8_lossy(message).trim_end_matches('\n')
        );
        println!("Binary ({} bits):  {}", encoded.message_bits.len(), encoded.message_bits);
        println!("Tree ({} bits):  {}", encoded.tree_bits.len(), encoded.tree_bits);
    }
    println!("Compression: {:.1}%", encoded.compression_percent(message.len()));

    if let Some(path) = &options.output {
        info!("Writing tree and message bits to file: {}", path.display());
        let mut writer = BufWriter::new(File::create(path)?);
        write_container(&encoded, &mut writer)?;
        writer.flush()?;
    }
    if let Some(path) = &options.dot {
        info!("Writing huffman tree to file: {}", path.display());
        let tree = hufflpuff::build_tree(message)?;
        fs::write(path, tree.to_string())?;
    }
    Ok(())
}

fn decode(options: &Options, input: &Path) -> Result<(), HuffError> {
    info!("Reading Huffman tree from file: {}", input.display());
    let mut reader = BufReader::new(File::open(input)?);
    let encoded = read_container(&mut reader)?;

    if options.verbose {
        println!("Tree:  {}", encoded.tree_bits);
        println!("Bits:  {}", encoded.message_bits);
    }

    let output = huffc::decode_message(&encoded.tree_bits, &encoded.message_bits)?;

    if options.verbose {
        println!("Output: {}", String::from_utf8_lossy(&output).trim_end_matches('\n'));
    }
    match &options.output {
        Some(path) => fs::write(path, &output)?,
        None if !options.verbose => io::stdout().write_all(&output)?,
        None => {}
    }
    Ok(())
}
