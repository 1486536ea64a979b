// src/cli/bridge_commands.rs
use tracing::{debug, instrument};

use crate::application::services::factory::create_bridge_service;
use crate::cli::display::{print_bookmarks, DisplayBookmark};
use crate::cli::error::{CliError, CliResult};
use crate::domain::bookmark::Bookmark;
use crate::domain::protocol::{Ack, BackendResponse};
use crate::domain::tag::Tag;

#[instrument(level = "debug")]
pub fn list(json: bool) -> CliResult<()> {
    let service = create_bridge_service();

    let response = service.list_bookmarks();
    service.broadcast(&BackendResponse::Bookmarks(response.clone()));

    if !response.success {
        return Err(CliError::CommandFailed(
            response
                .message
                .unwrap_or_else(|| "Host could not read bookmarks".to_string()),
        ));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let bookmarks = response.bookmarks.unwrap_or_default();
    let display: Vec<DisplayBookmark> = bookmarks.iter().map(DisplayBookmark::from_domain).collect();
    print_bookmarks(&display);

    Ok(())
}

#[instrument(level = "debug")]
pub fn add(
    url: String,
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
) -> CliResult<()> {
    let tags = Tag::parse_tag_option(tags.as_deref())?.unwrap_or_default();
    let bookmark = Bookmark::new(
        url.as_str(),
        title.as_deref().unwrap_or(""),
        description.as_deref().unwrap_or(""),
        tags,
    )?;

    let service = create_bridge_service();
    let ack = service.create_bookmark(&bookmark);
    service.broadcast(&BackendResponse::Created(ack));

    ensure_acknowledged(ack, "Host rejected the new bookmark")?;
    println!("Added bookmark: {}", url);
    Ok(())
}

#[instrument(level = "debug")]
pub fn update(
    id: i32,
    url: String,
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
) -> CliResult<()> {
    if id <= 0 {
        return Err(CliError::InvalidInput(format!("Invalid bookmark ID: {}", id)));
    }

    let tags = Tag::parse_tag_option(tags.as_deref())?.unwrap_or_default();
    let mut bookmark = Bookmark::new(
        url.as_str(),
        title.as_deref().unwrap_or(""),
        description.as_deref().unwrap_or(""),
        tags,
    )?;
    bookmark.id = Some(id);

    let service = create_bridge_service();
    let ack = service.update_bookmark(&bookmark);
    service.broadcast(&BackendResponse::Updated(ack));

    ensure_acknowledged(ack, &format!("Host could not update bookmark {}", id))?;
    println!("Updated bookmark {}", id);
    Ok(())
}

#[instrument(level = "debug")]
pub fn delete(id: i32) -> CliResult<()> {
    if id <= 0 {
        return Err(CliError::InvalidInput(format!("Invalid bookmark ID: {}", id)));
    }

    let service = create_bridge_service();
    let ack = service.delete_bookmark(id);
    service.broadcast(&BackendResponse::Deleted(ack));

    ensure_acknowledged(ack, &format!("Host could not delete bookmark {}", id))?;
    println!("Deleted bookmark {}", id);
    Ok(())
}

#[instrument(level = "debug")]
pub fn check() -> CliResult<()> {
    let service = create_bridge_service();

    if service.check_compatibility() {
        println!("Native host is compatible");
        Ok(())
    } else {
        debug!("Compatibility probe failed");
        Err(CliError::CommandFailed(
            "Native host is missing, outdated or on a different major version".to_string(),
        ))
    }
}

fn ensure_acknowledged(ack: Ack, message: &str) -> CliResult<()> {
    if ack.success {
        Ok(())
    } else {
        Err(CliError::CommandFailed(message.to_string()))
    }
}
