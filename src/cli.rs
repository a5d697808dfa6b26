use clap::Parser;
use std::path::PathBuf;

use crate::graph::GraphOptions;

#[derive(Parser, Debug)]
#[command(name = "arbor", version, about = "Visualize Git commit history as an interactive tree")]
pub struct Cli {
    /// Path inside the git repository
    #[arg(default_value = ".")]
    pub repo_path: PathBuf,

    /// Include remote-tracking branches in addition to local branches
    #[arg(long)]
    pub all: bool,

    /// Maximum number of commits to load (0 = no limit)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
}

impl Cli {
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            include_all: self.all,
            limit: self.limit,
        }
    }
}
