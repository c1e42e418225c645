//! Reply texts. HTML replies escape every user- or provider-supplied value.

use dbot_core::User;
use teloxide::utils::html::escape;
use youtube_search::{music_url, VideoResult};

pub const HELP_TEXT: &str = "<b>How to use me:</b>\n\n\
1. Simply type the name of the song you want to find.\n\
2. You can also include the artist for more accurate results (e.g., 'Queen - Another One Bites the Dust').\n\
3. I will search YouTube and give you the first result as a YouTube Music link.\n\n\
That's it! Happy listening. 🎶";

pub const NOT_FOUND_TEXT: &str = "Sorry, I couldn't find a matching song. 😔\n\
Please check the spelling or try a different name.";

pub const ERROR_TEXT: &str = "An unexpected error occurred. Please try again in a moment.";

/// Shown for live streams, which have no duration.
pub const LIVE_DURATION: &str = "LIVE";

/// `<a href="tg://user?id=..">name</a>` for the sender.
pub fn user_mention(user: &User) -> String {
    let name = user.display_name().unwrap_or_else(|| "there".to_string());
    format!("<a href=\"tg://user?id={}\">{}</a>", user.id, escape(&name))
}

pub fn greeting(user: &User) -> String {
    format!(
        "Hi {}! 👋\n\n\
         I'm your personal YouTube Music finder.\n\n\
         Just send me the name of any song, and I'll send you the YouTube Music link for it. \
         For example, try sending: 'Bohemian Rhapsody'",
        user_mention(user)
    )
}

pub fn searching(query: &str) -> String {
    format!("Searching for '{}'...", query)
}

pub fn found(video: &VideoResult) -> String {
    let duration = video.duration.as_deref().unwrap_or(LIVE_DURATION);
    format!(
        "✅ Found it!\n\n\
         <b>🎵 Title:</b> {}\n\
         <b>⏳ Duration:</b> {}\n\n\
         <b>🔗 Your Link:</b> <a href='{}'>Listen on YouTube Music</a>",
        escape(&video.title),
        escape(duration),
        escape(&music_url(&video.id)),
    )
}
