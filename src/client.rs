use std::collections::HashMap;

use reqwest::blocking::{Client, Request, Response};

use crate::route::Route;

const API_URL: &str = "http://www.bungie.net/api/reach/reachapijson.svc/";
const USER_AGENT: &str = "Halo:Reach API Python";

pub type ApiResponse = reqwest::Result<Response>;

/// Blocking client for the stats service. Every method formats a request
/// path, issues one GET and hands back the raw transport response; decoding
/// the body (and deciding what a non-2xx status means) is left to the
/// caller.
#[derive(Debug, Clone)]
pub struct ReachApi {
    token: String,
    api_url: String,
    headers: HashMap<String, String>,
}

impl ReachApi {
    pub fn new(token: &str) -> ReachApi {
        ReachApi::with_api_url(token, API_URL)
    }

    /// Same as [`ReachApi::new`] but pointed at a different endpoint, for
    /// mirrors of the service.
    pub fn with_api_url(token: &str, api_url: &str) -> ReachApi {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());

        ReachApi {
            token: token.to_string(),
            api_url: api_url.to_string(),
            headers,
        }
    }

    /// Merges `extra` into the current header set. Existing keys are
    /// overwritten, so callers can replace the default user agent.
    pub fn set_http_headers(&mut self, extra: HashMap<String, String>) {
        self.headers.extend(extra);
    }

    pub(crate) fn build_request(&self, client: &Client, uri: &str) -> reqwest::Result<Request> {
        let url = format!("{}{}", self.api_url, uri);
        let mut request = client.request(reqwest::Method::GET, &url);

        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        request.build()
    }

    /// Single point of I/O. Any transport failure comes back as the
    /// unmodified `reqwest::Error`, no retries and no reclassification.
    pub fn fetch(&self, uri: &str) -> ApiResponse {
        tracing::info!("Requesting from endpoint {}", uri);

        let client = Client::new();
        let request = self.build_request(&client, uri)?;

        client.execute(request)
    }

    /// Translation tables from resource ids to their detailed versions,
    /// medals and maps for example.
    pub fn get_game_metadata(&self) -> ApiResponse {
        self.fetch(&Route::GameMetadata.uri(&self.token))
    }

    /// The currently active weekly and daily challenges.
    pub fn get_current_challenges(&self) -> ApiResponse {
        self.fetch(&Route::CurrentChallenges.uri(&self.token))
    }

    /// Detailed information for a single game id.
    pub fn get_game_details(&self, game_id: &str) -> ApiResponse {
        self.fetch(&Route::GameDetails { game_id }.uri(&self.token))
    }

    /// A player's games in reverse chronological order, paginated.
    /// `variant_class` narrows the listing to one variant (Invasion,
    /// Campaign, ...); "Unknown" selects all of them. Pages start at 0.
    pub fn get_game_history(&self, gamertag: &str, variant_class: &str, page: u32) -> ApiResponse {
        self.fetch(
            &Route::GameHistory {
                gamertag,
                variant_class,
                page,
            }
            .uri(&self.token),
        )
    }

    pub fn get_player_details_with_stats_by_map(&self, gamertag: &str) -> ApiResponse {
        self.fetch(&Route::DetailsByMap { gamertag }.uri(&self.token))
    }

    /// Aggregate information on a player broken down by playlist, arena
    /// standing included.
    pub fn get_player_details_with_stats_by_playlist(&self, gamertag: &str) -> ApiResponse {
        self.fetch(&Route::DetailsByPlaylist { gamertag }.uri(&self.token))
    }

    /// Basic information about a player.
    pub fn get_player_details_with_no_stats(&self, gamertag: &str) -> ApiResponse {
        self.fetch(&Route::DetailsNoStats { gamertag }.uri(&self.token))
    }

    /// Listing of the files in a player's file share.
    pub fn get_player_file_share(&self, gamertag: &str) -> ApiResponse {
        self.fetch(&Route::FileShare { gamertag }.uri(&self.token))
    }

    /// File details for a single file.
    pub fn get_file_details(&self, file_id: &str) -> ApiResponse {
        self.fetch(&Route::FileDetails { file_id }.uri(&self.token))
    }

    /// A player's recent screenshots.
    pub fn get_player_recent_screenshots(&self, gamertag: &str) -> ApiResponse {
        self.fetch(&Route::RecentScreenshots { gamertag }.uri(&self.token))
    }

    /// File sets created by the player.
    pub fn get_player_file_sets(&self, gamertag: &str) -> ApiResponse {
        self.fetch(&Route::FileSets { gamertag }.uri(&self.token))
    }

    /// The files inside one of the player's file sets.
    pub fn get_player_file_set_files(&self, gamertag: &str, file_set_id: &str) -> ApiResponse {
        self.fetch(
            &Route::FileSetFiles {
                gamertag,
                file_set_id,
            }
            .uri(&self.token),
        )
    }

    /// Rendered videos created by the player, paginated from 0.
    pub fn get_player_rendered_videos(&self, gamertag: &str, page: u32) -> ApiResponse {
        self.fetch(&Route::RenderedVideos { gamertag, page }.uri(&self.token))
    }

    /// Files matching the given category and filter values. `tags` narrows
    /// the search further when set; filter values are forwarded to the
    /// service as-is, unknown ones surface as whatever error it returns.
    #[allow(clippy::too_many_arguments)]
    pub fn reach_file_search(
        &self,
        file_category: &str,
        map_filter: &str,
        engine_filter: &str,
        date_filter: &str,
        sort_filter: &str,
        tags: Option<&str>,
        page: u32,
    ) -> ApiResponse {
        self.fetch(
            &Route::FileSearch {
                file_category,
                map_filter,
                engine_filter,
                date_filter,
                sort_filter,
                tags,
                page,
            }
            .uri(&self.token),
        )
    }
}
