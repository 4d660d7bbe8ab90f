use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract text, confidence, regions, statistics, and metadata from ALTO files.
#[derive(Debug, Parser)]
#[command(name = "alto-tools", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the text content, merging hyphenated words
    Text {
        /// ALTO files or directories to walk for .xml/.alto files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Character encoding of the XML payload ('auto' sniffs the declaration)
        #[arg(long, value_name = "ENCODING")]
        xml_encoding: Option<String>,

        /// Character encoding of the files on disk
        #[arg(long, value_name = "ENCODING", default_value = "UTF-8")]
        file_encoding: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Report the mean OCR word confidence per file
    Confidence {
        /// ALTO files or directories to walk for .xml/.alto files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Character encoding of the XML payload ('auto' sniffs the declaration)
        #[arg(long, value_name = "ENCODING")]
        xml_encoding: Option<String>,

        /// Character encoding of the files on disk
        #[arg(long, value_name = "ENCODING", default_value = "UTF-8")]
        file_encoding: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract Illustration bounding boxes
    Illustrations {
        /// ALTO files or directories to walk for .xml/.alto files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Character encoding of the XML payload ('auto' sniffs the declaration)
        #[arg(long, value_name = "ENCODING")]
        xml_encoding: Option<String>,

        /// Character encoding of the files on disk
        #[arg(long, value_name = "ENCODING", default_value = "UTF-8")]
        file_encoding: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract GraphicalElement bounding boxes
    Graphics {
        /// ALTO files or directories to walk for .xml/.alto files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Character encoding of the XML payload ('auto' sniffs the declaration)
        #[arg(long, value_name = "ENCODING")]
        xml_encoding: Option<String>,

        /// Character encoding of the files on disk
        #[arg(long, value_name = "ENCODING", default_value = "UTF-8")]
        file_encoding: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Count TextLine, String, Glyph, Illustration, and GraphicalElement elements
    Statistics {
        /// ALTO files or directories to walk for .xml/.alto files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Character encoding of the XML payload ('auto' sniffs the declaration)
        #[arg(long, value_name = "ENCODING")]
        xml_encoding: Option<String>,

        /// Character encoding of the files on disk
        #[arg(long, value_name = "ENCODING", default_value = "UTF-8")]
        file_encoding: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Report the Description and OCRProcessing metadata
    Metadata {
        /// ALTO files or directories to walk for .xml/.alto files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Character encoding of the XML payload ('auto' sniffs the declaration)
        #[arg(long, value_name = "ENCODING")]
        xml_encoding: Option<String>,

        /// Character encoding of the files on disk
        #[arg(long, value_name = "ENCODING", default_value = "UTF-8")]
        file_encoding: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format shared by every subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// One JSON object per file
    Json,
}
