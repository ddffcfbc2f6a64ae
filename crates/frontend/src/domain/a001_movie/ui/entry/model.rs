//! Movie Entry - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a001_movie::submission::POSTER_PART;
use contracts::domain::a001_movie::AddMovieResponse;
use contracts::domain::a002_artist::ArtistRecord;

/// Fetch the artist registry for the cast picker
pub async fn fetch_artists() -> Result<Vec<ArtistRecord>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/admin/get-artist");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<ArtistRecord> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Submit the movie entry as multipart/form-data
///
/// Text parts come pre-rendered from the draft; the poster is attached
/// as a binary part only when one was staged. The browser sets the
/// multipart boundary, so no Content-Type header is written here.
pub async fn submit_movie(
    parts: Vec<(String, String)>,
    poster: Option<web_sys::File>,
) -> Result<AddMovieResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in &parts {
        form_data
            .append_with_str(name, value)
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some(file) = &poster {
        form_data
            .append_with_blob(POSTER_PART, file)
            .map_err(|e| format!("{e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/admin/add-movie");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: AddMovieResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
