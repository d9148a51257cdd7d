//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate or create the backing store and remember its identity
    Init,

    /// List bookmarks in the order they were saved
    List {
        /// Case-insensitive match against text and author
        #[arg(short, long)]
        search: Option<String>,
        /// Only bookmarks carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Save a post by URL
    Add {
        /// Post URL (x.com and twitter.com are both accepted)
        url: String,
        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Replace the tags of a bookmark
    Retag {
        /// Bookmark id
        id: String,
        /// New tag list (repeatable; none clears all tags)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a bookmark
    Remove {
        /// Bookmark id
        id: String,
    },

    /// List tags
    Tags,

    /// Create a tag
    TagAdd {
        name: String,
    },

    /// Delete a tag and strip it from every bookmark
    TagDelete {
        name: String,
    },

    /// Forget the remembered store identity
    Logout,

    /// Show resolved local paths
    Paths,
}
