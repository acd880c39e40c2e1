use http::header::{HeaderMap, HeaderValue, LINK};
use link_header::{Config, LinkError};

const SAMPLE: &[&str] = &[
    r#"<https://api.github.com/user/9287/repos?page=3&per_page=100>; rel="next", <https://api.github.com/user/9287/repos?page=1&per_page=100>; rel="prev""#,
    r#"<https://api.github.com/user/9287/repos?page=5&per_page=100>; rel="last"; title="Last page""#,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let values = match args.is_empty() {
        true => SAMPLE.iter().map(|s| s.to_string()).collect(),
        false => args,
    };

    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(LINK, HeaderValue::try_from(value)?);
    }

    match parse_links(&headers, &Config::from_env()) {
        Ok(Some(links)) => {
            let mut rels = links.iter().collect::<Vec<_>>();
            rels.sort_by_key(|(rel, _)| *rel);
            for (rel, link) in rels {
                println!("{rel}: {}", link.url());
                let mut params = link.iter().filter(|(name, _)| !matches!(*name, "url" | "rel")).collect::<Vec<_>>();
                params.sort();
                for (name, value) in params {
                    println!("  {name} = {value}");
                }
            }
        }
        Ok(None) => println!("no links"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Fold every `Link` field into a single list, then parse it.
fn parse_links(headers: &HeaderMap, config: &Config) -> Result<Option<link_header::Links>, LinkError> {
    let mut folded = String::new();
    for value in headers.get_all(LINK) {
        let Ok(value) = value.to_str() else {
            log::warn!("non visible ASCII link header ignored");
            continue;
        };
        if !folded.is_empty() {
            folded.push_str(", ");
        }
        folded.push_str(value);
    }
    config.parse(folded.as_str())
}
