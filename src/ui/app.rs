/// Data-viewer entry view: pick a remembered CSV URL or enter a new one

use crate::store::dedup_urls;
use crate::ui::components::{Alert, AlertType, Button, ButtonVariant};
use url::Url;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// URLs remembered in earlier sessions
    pub urls: Vec<String>,
    /// Fired once per URL the user loads
    pub on_remember: Callback<String>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let remembered = {
        let urls = props.urls.clone();
        use_state(move || urls)
    };
    let input = use_state(String::new);
    let loaded = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };

    let load = {
        let remembered = remembered.clone();
        let loaded = loaded.clone();
        let error = error.clone();
        let on_remember = props.on_remember.clone();

        Callback::from(move |raw: String| match parse_csv_url(&raw) {
            Ok(url) => {
                let mut urls = (*remembered).clone();
                urls.push(url.clone());
                remembered.set(dedup_urls(urls));

                on_remember.emit(url.clone());
                error.set(None);
                loaded.set(Some(url));
            }
            Err(e) => error.set(Some(e)),
        })
    };

    let on_load_input = {
        let load = load.clone();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| load.emit((*input).clone()))
    };

    html! {
        <div class="container mx-auto p-4 font-sans">
            <h1 class="text-2xl font-serif mb-4">{"CSV Viewer"}</h1>

            <div class="flex gap-2">
                <input
                    type="url"
                    class="flex-1 border rounded px-2 font-mono"
                    placeholder="https://example.com/data.csv"
                    value={(*input).clone()}
                    oninput={on_input}
                />
                <Button onclick={on_load_input} disabled={input.trim().is_empty()}>
                    {"Load"}
                </Button>
            </div>

            if let Some(msg) = (*error).clone() {
                <Alert message={msg} alert_type={AlertType::Error} />
            }

            if let Some(url) = (*loaded).clone() {
                <Alert message={format!("Loading {}", url)} />
            }

            if !remembered.is_empty() {
                <>
                <h2 class="text-lg mt-6 mb-2">{"Recent files"}</h2>
                <ul>
                    { for remembered.iter().map(|url| {
                        let onclick = {
                            let load = load.clone();
                            let url = url.clone();
                            Callback::from(move |_: MouseEvent| load.emit(url.clone()))
                        };
                        html! {
                            <li key={url.clone()} class="my-1" title={url.clone()}>
                                <Button onclick={onclick} variant={ButtonVariant::Secondary}>
                                    <i class="fas fa-file-csv mr-2"></i>
                                    {display_label(url)}
                                </Button>
                            </li>
                        }
                    }) }
                </ul>
                </>
            }
        </div>
    }
}

/// Validate user input as an http(s) URL, returning its normalized form
pub fn parse_csv_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter a URL".to_string());
    }

    let url = Url::parse(trimmed).map_err(|e| format!("Invalid URL: {}", e))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(format!("Unsupported scheme: {}", other)),
    }
}

/// Short "host/file.csv" label for a remembered URL
pub fn display_label(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let host = parsed.host_str().unwrap_or_default();
    let file = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default();

    if file.is_empty() {
        host.to_string()
    } else {
        format!("{}/{}", host, file)
    }
}
