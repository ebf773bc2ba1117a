use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mailsift_extract::DEFAULT_SUMMARY_CHARS;

#[derive(Parser)]
#[command(name = "mailsift", version)]
#[command(about = "Download inbox attachments and extract their text")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download a message's attachments.
    Download {
        /// Message to download attachments for.
        message_id: String,

        /// Directory the attachments are written to.
        #[arg(long, default_value = "./downloads")]
        out_dir: PathBuf,

        /// Download only the attachment with this id.
        #[arg(long)]
        attachment_id: Option<String>,

        /// Inbox the message belongs to.
        #[arg(long, env = "MAILSIFT_INBOX")]
        inbox: Option<String>,
    },

    /// Analyze a local attachment file.
    Analyze {
        /// Path of the file to analyze.
        path: PathBuf,

        /// Maximum summary length in characters.
        #[arg(long, default_value_t = DEFAULT_SUMMARY_CHARS)]
        max_chars: usize,
    },
}
