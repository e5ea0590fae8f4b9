//! Shared reply helpers: render a handler result and send it, logging failures with a tag.
use crate::error::HandlerError;
use crate::ui::Reply;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub const INTERNAL_ERROR: &str = "❌ Terjadi kesalahan saat memproses perintah. Coba lagi nanti.";

/// Turns a handler result into the reply the caller should see.
/// Rejections become private notices; storage failures are logged and hidden behind a
/// generic private message.
pub fn resolve_reply(tag: &str, result: Result<Reply, HandlerError>) -> Reply {
    match result {
        Ok(reply) => reply,
        Err(HandlerError::Command(rejection)) => {
            tracing::debug!(target="command.rejected", tag=%tag, reason=%rejection);
            Reply::private_text(rejection.to_string())
        }
        Err(HandlerError::Store(e)) => {
            tracing::error!(target="command.store", tag=%tag, error=%e, "storage failure");
            Reply::private_text(INTERNAL_ERROR)
        }
    }
}

/// Answer a slash command with the resolved reply.
pub async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    tag: &str,
    result: Result<Reply, HandlerError>,
) {
    let reply = resolve_reply(tag, result);
    if let Err(e) = interaction
        .create_response(&ctx.http, reply.to_interaction_response())
        .await
    {
        tracing::error!(target="ui.respond", user_id=%interaction.user.id, tag=%tag, error=?e, "create_response failed");
    }
}

/// Reply in-channel to a text message.
pub async fn reply_to_message(
    ctx: &Context,
    msg: &Message,
    tag: &str,
    result: Result<Reply, HandlerError>,
) {
    let reply = resolve_reply(tag, result);
    let builder = reply.to_message().reference_message(msg);
    if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
        tracing::error!(target="ui.reply", channel_id=%msg.channel_id, tag=%tag, error=?e, "send_message failed");
    }
}
