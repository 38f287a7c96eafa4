// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{PreviewError, BINARY_SNIFF_LEN, PREVIEW_CAP};

pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff"];
pub const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];
pub const DIAGRAM_EXTENSIONS: [&str; 2] = ["mmd", "mermaid"];
pub const JSON_EXTENSIONS: [&str; 1] = ["json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Directory,
    Image,
    Binary,
    NonUtf8Text,
    Markdown,
    Diagram,
    Json,
    SyntaxText,
}

impl ContentKind {
    /// Kinds whose rendering is derived from the (possibly truncated) byte sample.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Markdown | Self::Diagram | Self::Json | Self::SyntaxText)
    }
}

/// Lowercased extension of `path`, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

fn has_extension(ext: Option<&str>, set: &[&str]) -> bool {
    ext.is_some_and(|ext| set.contains(&ext))
}

pub fn is_image_path(path: &Path) -> bool {
    has_extension(extension_of(path).as_deref(), &IMAGE_EXTENSIONS)
}

/// The first [`PREVIEW_CAP`] bytes of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSample {
    bytes: Vec<u8>,
}

impl ByteSample {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Reads at most [`PREVIEW_CAP`] bytes from `path`.
    pub fn read(path: &Path) -> Result<Self, PreviewError> {
        let file = File::open(path)
            .map_err(|source| PreviewError::Open { path: path.to_path_buf(), source })?;

        let mut bytes = Vec::with_capacity(8 * 1024);
        file.take(PREVIEW_CAP as u64)
            .read_to_end(&mut bytes)
            .map_err(|source| PreviewError::Read { path: path.to_path_buf(), source })?;
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A sample that filled the cap is assumed to be cut short.
    pub fn is_truncated(&self) -> bool {
        self.bytes.len() >= PREVIEW_CAP
    }

    pub fn looks_binary(&self) -> bool {
        let head = &self.bytes[..self.bytes.len().min(BINARY_SNIFF_LEN)];
        memchr::memchr(0, head).is_some()
    }

    /// The sample as UTF-8. A multi-byte sequence cut off by the cap is dropped rather than
    /// treated as invalid.
    pub fn as_utf8(&self) -> Option<&str> {
        match std::str::from_utf8(&self.bytes) {
            Ok(text) => Some(text),
            Err(err) if err.error_len().is_none() && self.is_truncated() => {
                std::str::from_utf8(&self.bytes[..err.valid_up_to()]).ok()
            }
            Err(_) => None,
        }
    }

    /// The sample as text with `\r\n` and lone `\r` normalized to `\n`, or `None` when it is not
    /// valid UTF-8.
    pub fn text(&self) -> Option<String> {
        let text = self.as_utf8()?;
        if memchr::memchr(b'\r', text.as_bytes()).is_none() {
            return Some(text.to_owned());
        }
        Some(text.replace("\r\n", "\n").replace('\r', "\n"))
    }
}

/// Picks the renderer for an entry.
///
/// `sample` is only consulted for regular non-image files; callers may pass `None` for
/// directories and images.
pub fn classify(path: &Path, is_dir: bool, sample: Option<&ByteSample>) -> ContentKind {
    if is_dir {
        return ContentKind::Directory;
    }

    let ext = extension_of(path);
    let ext = ext.as_deref();
    if has_extension(ext, &IMAGE_EXTENSIONS) {
        return ContentKind::Image;
    }

    if let Some(sample) = sample {
        if sample.looks_binary() {
            return ContentKind::Binary;
        }
        if sample.as_utf8().is_none() {
            return ContentKind::NonUtf8Text;
        }
    }

    if has_extension(ext, &MARKDOWN_EXTENSIONS) {
        ContentKind::Markdown
    } else if has_extension(ext, &DIAGRAM_EXTENSIONS) {
        ContentKind::Diagram
    } else if has_extension(ext, &JSON_EXTENSIONS) {
        ContentKind::Json
    } else {
        ContentKind::SyntaxText
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rstest::rstest;

    use super::{classify, ByteSample, ContentKind};
    use crate::preview::PREVIEW_CAP;

    fn text_sample(text: &str) -> ByteSample {
        ByteSample::new(text.as_bytes().to_vec())
    }

    #[rstest]
    #[case("notes.md", ContentKind::Markdown)]
    #[case("README.MARKDOWN", ContentKind::Markdown)]
    #[case("page.mdx", ContentKind::Markdown)]
    #[case("flow.mmd", ContentKind::Diagram)]
    #[case("flow.Mermaid", ContentKind::Diagram)]
    #[case("data.json", ContentKind::Json)]
    #[case("main.rs", ContentKind::SyntaxText)]
    #[case("Makefile", ContentKind::SyntaxText)]
    #[case("logo.svg", ContentKind::SyntaxText)]
    fn classifies_text_by_extension(#[case] name: &str, #[case] expected: ContentKind) {
        assert_eq!(classify(Path::new(name), false, Some(&text_sample("hello"))), expected);
    }

    #[rstest]
    #[case("a.png")]
    #[case("a.JPG")]
    #[case("a.jpeg")]
    #[case("a.webp")]
    #[case("a.gif")]
    #[case("a.bmp")]
    #[case("a.tiff")]
    fn image_extensions_win_before_sniffing(#[case] name: &str) {
        let binary = ByteSample::new(vec![0, 1, 2]);
        assert_eq!(classify(Path::new(name), false, Some(&binary)), ContentKind::Image);
    }

    #[test]
    fn directories_win_over_everything() {
        assert_eq!(classify(Path::new("pics.png"), true, None), ContentKind::Directory);
    }

    #[test]
    fn nul_within_sniff_window_is_binary_regardless_of_extension() {
        let mut bytes = b"# title\n".to_vec();
        bytes.push(0);
        let sample = ByteSample::new(bytes);
        assert_eq!(classify(Path::new("doc.md"), false, Some(&sample)), ContentKind::Binary);

        let mut late = vec![b'a'; 8 * 1024];
        late.push(0);
        let sample = ByteSample::new(late);
        assert_eq!(classify(Path::new("doc.md"), false, Some(&sample)), ContentKind::Markdown);
    }

    #[test]
    fn invalid_utf8_is_non_utf8_text() {
        let sample = ByteSample::new(vec![b'o', b'k', 0xff, 0xfe]);
        assert_eq!(classify(Path::new("a.txt"), false, Some(&sample)), ContentKind::NonUtf8Text);
    }

    #[test]
    fn text_normalizes_line_endings() {
        assert_eq!(text_sample("a\r\nb\rc\n").text().as_deref(), Some("a\nb\nc\n"));
        assert_eq!(ByteSample::new(vec![0xff]).text(), None);
    }

    #[test]
    fn multibyte_char_cut_by_the_cap_is_still_text() {
        let mut bytes = vec![b'a'; PREVIEW_CAP - 1];
        bytes.push(0xc3);
        let sample = ByteSample::new(bytes);
        assert_eq!(classify(Path::new("a.txt"), false, Some(&sample)), ContentKind::SyntaxText);
        assert_eq!(sample.text().map(|text| text.len()), Some(PREVIEW_CAP - 1));
    }

    #[test]
    fn truncation_is_exactly_the_cap() {
        assert!(ByteSample::new(vec![b'a'; PREVIEW_CAP]).is_truncated());
        assert!(!ByteSample::new(vec![b'a'; PREVIEW_CAP - 1]).is_truncated());
    }
}
