//! Subcommand execution.

use anyhow::{Context, Result, bail};
use fedigraph_client::{FediClient, MediaUpload, PageArgs, SubscriptionStream};
use fedigraph_types::CreateNoteInput;
use futures::StreamExt;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::args::{Command, PostArgs, TimelineArgs, UploadArgs, WatchCommand};

/// Run one subcommand to completion.
pub async fn run(client: &FediClient, command: Command) -> Result<()> {
    match command {
        Command::Timeline(args) => timeline(client, args).await,
        Command::Post(args) => post(client, args).await,
        Command::Delete { id } => {
            let outcome = client.delete_note(&id).await?;
            print(&serde_json::json!({ "id": id, "removed": outcome.is_removed() }))
        }
        Command::Follow { id } => print(&client.follow_actor(&id).await?),
        Command::Unfollow { id } => {
            let outcome = client.unfollow_actor(&id).await?;
            print(&serde_json::json!({ "id": id, "removed": outcome.is_removed() }))
        }
        Command::Upload(args) => upload(client, args).await,
        Command::Watch(topic) => watch(client, topic).await,
        Command::Health { domain } => print(&client.get_federation_health(&domain).await?),
    }
}

async fn timeline(client: &FediClient, args: TimelineArgs) -> Result<()> {
    let mut page = args.after.map_or_else(PageArgs::default, PageArgs::after);
    if let Some(limit) = args.limit {
        page = page.limit(limit);
    }

    let connection = client.fetch_timeline(&args.selector.kind(), &page).await?;
    for note in connection.nodes() {
        print(note)?;
    }
    if let Some(cursor) = connection.next_cursor() {
        info!(cursor, "More notes available, continue with --after");
    }
    Ok(())
}

async fn post(client: &FediClient, args: PostArgs) -> Result<()> {
    let mut input = CreateNoteInput::new(args.content).visibility(args.visibility.into());
    if let Some(spoiler) = args.spoiler {
        input = input.spoiler(spoiler);
    }
    if let Some(id) = args.reply_to {
        input = input.reply_to(id);
    }
    if let Some(url) = args.quote {
        input = input.quote(url);
    }
    input.attachment_ids = args.media;

    print(&client.create_note(&input).await?)
}

async fn upload(client: &FediClient, args: UploadArgs) -> Result<()> {
    let bytes = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let file_name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .context("File name is not valid UTF-8")?
        .to_string();
    let content_type = match args.content_type {
        Some(content_type) => content_type,
        None => guess_content_type(&args.path)?.to_string(),
    };

    let mut upload = MediaUpload::new(bytes, file_name, content_type).sensitive(args.sensitive);
    if let Some(description) = args.description {
        upload = upload.description(description);
    }

    print(&client.upload_media(upload).await?)
}

fn guess_content_type(path: &Path) -> Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    Ok(match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        other => bail!("Cannot guess the content type of .{other}, pass --content-type"),
    })
}

async fn watch(client: &FediClient, topic: WatchCommand) -> Result<()> {
    match topic {
        WatchCommand::Timeline(selector) => {
            drain(client, client.subscribe_timeline(&selector.kind()).await?).await
        }
        WatchCommand::Notifications => drain(client, client.subscribe_notifications().await?).await,
        WatchCommand::Federation { domain } => {
            let stream = client.subscribe_federation_health(domain.as_deref()).await?;
            drain(client, stream).await
        }
    }
}

/// Print events until the stream ends or the process is interrupted.
async fn drain<T: Serialize>(client: &FediClient, mut stream: SubscriptionStream<T>) -> Result<()> {
    info!(operation = stream.operation(), "Watching, press Ctrl+C to stop");

    loop {
        tokio::select! {
            item = stream.next() => match item {
                Some(Ok(event)) => print(&event)?,
                Some(Err(e)) => {
                    warn!(error = %e, "Subscription failed");
                    return Err(e.into());
                }
                None => {
                    info!("Subscription ended by the server");
                    return Ok(());
                }
            },
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                info!("Received SIGINT, closing subscription...");
                client.close();
                return Ok(());
            }
        }
    }
}

fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
