use blog_client::{ClientError, PostApi, PostDraft};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blog", about = "Manage posts on a blog store")]
struct Cli {
    /// Base URL of the post store
    #[clap(short, long, env = "BLOG_API_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all posts, newest first
    List,
    /// Show one post in full
    Get { id: String },
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        author: String,
    },
    /// Replace a post's title, content, and author
    Update {
        id: String,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        author: String,
    },
    Delete {
        id: String,
        /// Required confirmation for the destructive action
        #[clap(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    match run(args).await {
        Ok(()) => {}
        Err(ClientError::NotFound) => {
            eprintln!("Post does not exist.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Cli) -> Result<(), ClientError> {
    let api = PostApi::new(&args.server)?;

    match args.command {
        Command::List => {
            let posts = api.list_posts().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- {post}");
            }
        }
        Command::Get { id } => {
            let post = api.get_post(&id).await?;
            println!("{}", post.title);
            println!("by {} | created {} | updated {}", post.author, post.created_at, post.updated_at);
            println!();
            println!("{}", post.content);
        }
        Command::Create {
            title,
            content,
            author,
        } => {
            let post = api.create_post(&PostDraft::new(title, content, author)).await?;
            println!("Post created! ID: {}", post.post_id);
        }
        Command::Update {
            id,
            title,
            content,
            author,
        } => {
            let post = api
                .update_post(&id, &PostDraft::new(title, content, author))
                .await?;
            println!("Post updated: {post}");
        }
        Command::Delete { id, yes } => {
            if !yes {
                return Err(ClientError::Validation(
                    "deleting a post is permanent; re-run with --yes to confirm".into(),
                ));
            }
            api.delete_post(&id).await?;
            println!("Post deleted!");
        }
    }

    Ok(())
}
