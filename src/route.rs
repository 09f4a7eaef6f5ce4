use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// One variant per remote operation. `uri` renders the exact wire path, so
/// everything up to the HTTP call can be checked without a network.
#[derive(Debug, Clone)]
pub enum Route<'a> {
    GameMetadata,
    CurrentChallenges,
    GameDetails {
        game_id: &'a str,
    },
    GameHistory {
        gamertag: &'a str,
        variant_class: &'a str,
        page: u32,
    },
    DetailsByMap {
        gamertag: &'a str,
    },
    DetailsByPlaylist {
        gamertag: &'a str,
    },
    DetailsNoStats {
        gamertag: &'a str,
    },
    FileShare {
        gamertag: &'a str,
    },
    FileDetails {
        file_id: &'a str,
    },
    RecentScreenshots {
        gamertag: &'a str,
    },
    FileSets {
        gamertag: &'a str,
    },
    FileSetFiles {
        gamertag: &'a str,
        file_set_id: &'a str,
    },
    RenderedVideos {
        gamertag: &'a str,
        page: u32,
    },
    FileSearch {
        file_category: &'a str,
        map_filter: &'a str,
        engine_filter: &'a str,
        date_filter: &'a str,
        sort_filter: &'a str,
        tags: Option<&'a str>,
        page: u32,
    },
}

impl Route<'_> {
    /// Request path for this operation, with the token spliced in after the
    /// operation prefix. Segment order is part of the wire contract.
    pub fn uri(&self, token: &str) -> String {
        match self {
            Route::GameMetadata => format!("game/metadata/{}", token),
            Route::CurrentChallenges => format!("game/challenges/{}", token),
            Route::GameDetails { game_id } => format!("game/details/{}/{}", token, game_id),
            Route::GameHistory {
                gamertag,
                variant_class,
                page,
            } => format!(
                "player/gamehistory/{}/{}/{}/{}",
                token,
                escape_gamertag(gamertag),
                variant_class,
                page
            ),
            Route::DetailsByMap { gamertag } => {
                format!("player/details/bymap/{}/{}", token, escape_gamertag(gamertag))
            }
            Route::DetailsByPlaylist { gamertag } => format!(
                "player/details/byplaylist/{}/{}",
                token,
                escape_gamertag(gamertag)
            ),
            Route::DetailsNoStats { gamertag } => format!(
                "player/details/nostats/{}/{}",
                token,
                escape_gamertag(gamertag)
            ),
            Route::FileShare { gamertag } => {
                format!("file/share/{}/{}", token, escape_gamertag(gamertag))
            }
            Route::FileDetails { file_id } => format!("file/details/{}/{}", token, file_id),
            Route::RecentScreenshots { gamertag } => {
                format!("file/screenshots/{}/{}", token, escape_gamertag(gamertag))
            }
            Route::FileSets { gamertag } => {
                format!("file/sets/{}/{}", token, escape_gamertag(gamertag))
            }
            Route::FileSetFiles {
                gamertag,
                file_set_id,
            } => format!(
                "file/sets/files/{}/{}/{}",
                token,
                escape_gamertag(gamertag),
                file_set_id
            ),
            Route::RenderedVideos { gamertag, page } => format!(
                "file/videos/{}/{}/{}",
                token,
                escape_gamertag(gamertag),
                page
            ),
            Route::FileSearch {
                file_category,
                map_filter,
                engine_filter,
                date_filter,
                sort_filter,
                tags,
                page,
            } => {
                let mut uri = format!(
                    "file/search/{}/{}/{}/{}/{}/{}/{}",
                    token, file_category, map_filter, engine_filter, date_filter, sort_filter, page
                );

                if let Some(tags) = tags {
                    if !tags.is_empty() {
                        uri.push_str("?tags=");
                        uri.push_str(&escape_tags(tags));
                    }
                }

                uri
            }
        }
    }
}

// The service's decoder cannot handle '+' where a space was, so gamertags
// get spaces swapped for a literal "%20" and nothing else.
pub fn escape_gamertag(gamertag: &str) -> String {
    gamertag.replace(' ', "%20")
}

// Tags live in the query string and take regular percent-encoding. Spaces
// still come out as "%20", not '+'.
fn escape_tags(tags: &str) -> String {
    utf8_percent_encode(tags, NON_ALPHANUMERIC).to_string()
}
