use blog_client::{BlogClient, NewComment, NewPost};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Command line client for the travel blog API")]
struct Cli {
    #[clap(short, long, env = "BLOG_SERVER", default_value = "http://127.0.0.1:8080")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    ListPosts,
    GetPost {
        id: i64,
    },
    CreatePost {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        location: String,
        #[clap(long)]
        author_id: String,
        #[clap(long)]
        author_name: String,
        #[clap(long)]
        image_url: Option<String>,
        /// Repeat for several tags; order is kept.
        #[clap(long = "tag")]
        tags: Vec<String>,
    },
    ListComments {
        post_id: i64,
    },
    CreateComment {
        post_id: i64,
        #[clap(long)]
        content: String,
        #[clap(long)]
        author_id: String,
        #[clap(long)]
        author_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let client = BlogClient::connect(&args.server)?;

    match args.command {
        Command::ListPosts => {
            let posts = client.list_posts().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- [{}] {} (by {})", post.id, post.title, post.author_name);
            }
        }
        Command::GetPost { id } => {
            let post = client.get_post(id).await?;
            println!("{}", post);
        }
        Command::CreatePost {
            title,
            content,
            location,
            author_id,
            author_name,
            image_url,
            tags,
        } => {
            let created = client
                .create_post(&NewPost {
                    title,
                    content,
                    location,
                    author_id,
                    author_name,
                    image_url,
                    tags,
                })
                .await?;
            println!("{} ID: {}", created.message, created.id);
        }
        Command::ListComments { post_id } => {
            let comments = client.list_comments(post_id).await?;
            println!("Comments on post {} ({})", post_id, comments.len());
            for comment in comments {
                println!("- {}", comment);
            }
        }
        Command::CreateComment {
            post_id,
            content,
            author_id,
            author_name,
        } => {
            let created = client
                .create_comment(
                    post_id,
                    &NewComment {
                        content,
                        author_id,
                        author_name,
                    },
                )
                .await?;
            println!("{} ID: {}", created.message, created.id);
        }
    }

    Ok(())
}
