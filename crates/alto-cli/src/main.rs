mod cli;
mod confidence_cmd;
mod metadata_cmd;
mod regions_cmd;
mod shared;
mod statistics_cmd;
mod text_cmd;

use alto::RegionKind;
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Text {
            ref inputs,
            ref xml_encoding,
            ref file_encoding,
            ref format,
        } => text_cmd::run(inputs, xml_encoding.as_deref(), file_encoding, format),
        cli::Commands::Confidence {
            ref inputs,
            ref xml_encoding,
            ref file_encoding,
            ref format,
        } => confidence_cmd::run(inputs, xml_encoding.as_deref(), file_encoding, format),
        cli::Commands::Illustrations {
            ref inputs,
            ref xml_encoding,
            ref file_encoding,
            ref format,
        } => regions_cmd::run(
            inputs,
            xml_encoding.as_deref(),
            file_encoding,
            format,
            RegionKind::Illustration,
        ),
        cli::Commands::Graphics {
            ref inputs,
            ref xml_encoding,
            ref file_encoding,
            ref format,
        } => regions_cmd::run(
            inputs,
            xml_encoding.as_deref(),
            file_encoding,
            format,
            RegionKind::GraphicalElement,
        ),
        cli::Commands::Statistics {
            ref inputs,
            ref xml_encoding,
            ref file_encoding,
            ref format,
        } => statistics_cmd::run(inputs, xml_encoding.as_deref(), file_encoding, format),
        cli::Commands::Metadata {
            ref inputs,
            ref xml_encoding,
            ref file_encoding,
            ref format,
        } => metadata_cmd::run(inputs, xml_encoding.as_deref(), file_encoding, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
