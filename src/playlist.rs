use crate::catalog::CHANNELS;

const STREAM_DOMAIN: &str = "smoothstreams.tv";

/// Render the playlist for one authenticated session.
///
/// Entries are emitted in ascending numeric channel order, whatever order the
/// catalog stores them in. Identical inputs produce byte-identical output.
pub fn build_playlist(server: &str, host: &str, token: &str) -> String {
    let mut channels: Vec<(u32, &str)> = CHANNELS.to_vec();
    channels.sort_unstable_by_key(|(id, _)| *id);

    let mut playlist = String::from("#EXTM3U\n");
    for (id, name) in channels {
        playlist.push_str(&format!("#EXTINF:-1, {:02} {}\n", id, name));
        playlist.push_str(&format!(
            "https://{}.{}/{}/ch{:02}q1.stream/playlist.m3u8?wmsAuthSign={}\n",
            server, STREAM_DOMAIN, host, id, token
        ));
    }

    playlist
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_header_line() {
        let playlist = build_playlist("dnaw", "viewstvn", "abc123");
        assert_eq!(playlist.lines().next(), Some("#EXTM3U"));
    }

    #[test]
    fn test_line_count() {
        let playlist = build_playlist("dnaw", "viewstvn", "abc123");
        assert_eq!(playlist.lines().count(), 1 + 2 * CHANNELS.len());
    }

    #[test]
    fn test_channel_01_url_template() {
        let playlist = build_playlist("dnaw", "viewstvn", "abc123");
        let mut lines = playlist.lines();
        assert_eq!(lines.next(), Some("#EXTM3U"));
        assert_eq!(lines.next(), Some("#EXTINF:-1, 01 ESPNNews"));
        assert_eq!(
            lines.next(),
            Some(
                "https://dnaw.smoothstreams.tv/viewstvn/ch01q1.stream/playlist.m3u8?wmsAuthSign=abc123"
            )
        );
    }

    /// Ids on the descriptor lines, in emission order.
    fn descriptor_ids(playlist: &str) -> Vec<u32> {
        playlist
            .lines()
            .filter_map(|line| line.strip_prefix("#EXTINF:-1, "))
            .map(|rest| {
                rest.split_whitespace()
                    .next()
                    .and_then(|id| id.parse().ok())
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_numeric_order_not_lexical() {
        let playlist = build_playlist("dnaw", "viewstvn", "abc123");
        let ids = descriptor_ids(&playlist);
        assert_eq!(ids.len(), CHANNELS.len());
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

        // Lexically "10" sorts before "2" and "100" before "99"; numerically
        // they must not.
        let pos = |wanted: u32| ids.iter().position(|id| *id == wanted).unwrap();
        assert!(pos(2) < pos(10));
        assert!(pos(99) < pos(100));
    }

    #[test]
    fn test_urls_are_well_formed() {
        let playlist = build_playlist("dnaw", "viewstvn", "s3cret=/+token");
        let urls: Vec<&str> = playlist
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect();
        assert_eq!(urls.len(), CHANNELS.len());

        for url in urls {
            let parsed = Url::parse(url).unwrap();
            assert_eq!(parsed.scheme(), "https");
            assert_eq!(parsed.host_str(), Some("dnaw.smoothstreams.tv"));
            assert!(parsed.path().starts_with("/viewstvn/ch"));
            assert!(parsed.path().ends_with("q1.stream/playlist.m3u8"));
            assert!(parsed.query().unwrap().starts_with("wmsAuthSign="));
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let first = build_playlist("deu-nl3", "view247", "tok");
        let second = build_playlist("deu-nl3", "view247", "tok");
        assert_eq!(first, second);
    }
}
