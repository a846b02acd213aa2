use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};

// generated profile placeholder
//
// an inline svg (gradient backdrop, head and shoulders) so that it can never fail to load
const PLACEHOLDER_SVG: &str = r##"<svg xmlns='http://www.w3.org/2000/svg' width='512' height='512'>
  <defs>
    <linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>
      <stop offset='0%' stop-color='#06b6d4'/>
      <stop offset='100%' stop-color='#3b82f6'/>
    </linearGradient>
  </defs>
  <rect width='100%' height='100%' fill='url(#g)'/>
  <circle cx='256' cy='200' r='80' fill='white' fill-opacity='0.85'/>
  <rect x='128' y='308' width='256' height='120' rx='60' fill='white' fill-opacity='0.85'/>
</svg>"##;

static PLACEHOLDER: LazyLock<String> = LazyLock::new(|| {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(PLACEHOLDER_SVG))
});

pub fn placeholder_data_url() -> &'static str {
    PLACEHOLDER.as_str()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackState {
    Trying(usize),
    Exhausted,
}

// image fallback cursor
//
// walks an ordered list of `len` candidate locations, one step per load failure.  once every
// candidate has failed the cursor is exhausted and stays that way
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackCursor {
    state: FallbackState,
    len: usize,
}

impl FallbackCursor {
    pub fn new(len: usize) -> Self {
        let state = match len {
            0 => FallbackState::Exhausted,
            _ => FallbackState::Trying(0),
        };

        FallbackCursor { state, len }
    }

    pub fn state(&self) -> FallbackState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == FallbackState::Exhausted
    }

    // index of the candidate being tried, or `len` once exhausted
    pub fn position(&self) -> usize {
        match self.state {
            FallbackState::Trying(i) => i,
            FallbackState::Exhausted => self.len,
        }
    }

    pub fn advance(&mut self) {
        if let FallbackState::Trying(i) = self.state {
            self.state = if i + 1 < self.len {
                FallbackState::Trying(i + 1)
            } else {
                FallbackState::Exhausted
            };
        }
    }

    // the location to render right now
    pub fn source<'a, T: AsRef<str>>(&self, candidates: &'a [T], placeholder: &'a str) -> &'a str {
        match self.state {
            FallbackState::Trying(i) => candidates.get(i).map_or(placeholder, |c| c.as_ref()),
            FallbackState::Exhausted => placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "data:placeholder";

    #[test]
    fn walks_candidates_then_placeholder() {
        let candidates = ["/a.png", "/b.png"];
        let mut cursor = FallbackCursor::new(candidates.len());

        assert_eq!(cursor.source(&candidates, FALLBACK), "/a.png");

        cursor.advance();
        assert_eq!(cursor.source(&candidates, FALLBACK), "/b.png");

        cursor.advance();
        assert_eq!(cursor.source(&candidates, FALLBACK), FALLBACK);
        assert!(cursor.is_exhausted());

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.source(&candidates, FALLBACK), FALLBACK);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn empty_list_starts_exhausted() {
        let candidates: [&str; 0] = [];
        let cursor = FallbackCursor::new(0);

        assert_eq!(cursor.state(), FallbackState::Exhausted);
        assert_eq!(cursor.source(&candidates, FALLBACK), FALLBACK);
    }

    #[test]
    fn position_is_bounded_and_monotonic() {
        for n in 0..6 {
            let candidates: Vec<String> = (0..n).map(|i| format!("/{i}.png")).collect();
            let mut cursor = FallbackCursor::new(n);

            for failures in 0..(n + 3) {
                let position = cursor.position();
                assert!(position <= n);

                if failures < n {
                    assert_eq!(cursor.state(), FallbackState::Trying(failures));
                    assert_eq!(cursor.source(candidates.as_slice(), FALLBACK), candidates[failures]);
                } else {
                    assert!(cursor.is_exhausted());
                    assert_eq!(cursor.source(candidates.as_slice(), FALLBACK), FALLBACK);
                }

                cursor.advance();
                assert!(cursor.position() >= position);
            }
        }
    }

    #[test]
    fn placeholder_is_an_inline_svg() {
        let url = placeholder_data_url();

        assert!(url.starts_with("data:image/svg+xml;base64,"));

        let encoded = url.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, PLACEHOLDER_SVG.as_bytes());
    }
}
