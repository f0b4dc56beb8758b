//! Random string generation for `stepdoc rand`.
//!
//! Formats draw uniformly from a fixed alphabet; a dictionary draws whole
//! words. The caller supplies the RNG so production uses the OS generator
//! and tests can seed one.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_LENGTH: usize = 32;
pub const DEFAULT_WORDS: usize = 6;
pub const DEFAULT_DICE: usize = 6;
pub const WORD_SEPARATOR: &str = "-";

const ASCII: &[u8] =
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const HEX: &[u8] = b"0123456789abcdef";
const DECIMAL: &[u8] = b"0123456789";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One emoji per byte value, picked so neighbours in a fingerprint are easy
/// to tell apart. Every entry renders as emoji without a variation selector.
const EMOJI: [char; 256] = [
    '🐶', '🐱', '🐹', '🐰', '🐻', '🐼', '🐯', '🐮',
    '🐷', '🐵', '🐔', '🐦', '🦆', '🦅', '🦇', '🐺',
    '🐴', '🐝', '🐛', '🐌', '🐞', '🦗', '🐢', '🐍',
    '🦖', '🦕', '🦑', '🦞', '🦀', '🐠', '🐟', '🐳',
    '🐊', '🐆', '🦍', '🐘', '🦏', '🐪', '🦘', '🐎',
    '🐏', '🦙', '🐐', '🐩', '🦃', '🦚', '🦢', '🦝',
    '🦔', '🎄', '🌲', '🌴', '🌱', '🍀', '🎋', '🍃',
    '🍁', '🍄', '🌾', '🌷', '🌹', '🌸', '🌻', '🌛',
    '💫', '⭐', '⚡', '🔥', '⛄', '💧', '🍎', '🍊',
    '🍋', '🍉', '🍇', '🍈', '🍑', '🥭', '🥥', '🥝',
    '🍆', '🥦', '🥒', '🥕', '🥔', '🥐', '🍞', '🥖',
    '🧀', '🥚', '🥞', '🥩', '🍗', '🌭', '🍔', '🍕',
    '🥙', '🌮', '🥗', '🥘', '🍜', '🍲', '🍣', '🥟',
    '🍤', '🥠', '🍡', '🥧', '🍰', '🎂', '🍭', '🍬',
    '🍿', '🍪', '🌰', '🍯', '🥛', '☕', '🥤', '🍶',
    '🍷', '🥃', '🍹', '🥄', '🍴', '🏀', '🏈', '🥎',
    '🏐', '🏉', '🎱', '🏓', '🏒', '🥍', '🥅', '🏹',
    '🎣', '🥋', '🎽', '🛷', '🎿', '🏆', '🎯', '🎳',
    '🎰', '🧩', '🎭', '🧵', '🧶', '🥁', '🎺', '🎸',
    '🎬', '🚗', '🛸', '🚎', '🚓', '🚒', '🚐', '🚛',
    '🛴', '🚲', '🚨', '🚡', '🚟', '🚝', '🚂', '💺',
    '🚀', '🚁', '🛶', '🚤', '⚓', '⛽', '🚦', '🚏',
    '🗽', '🏰', '🏯', '🎢', '🎠', '🌋', '⛺', '🏠',
    '🏭', '🏢', '🏦', '💒', '⛪', '🕍', '🕋', '📱',
    '💾', '💿', '📷', '🎥', '📟', '📺', '🧭', '⌛',
    '📡', '🔌', '💡', '🧯', '💵', '💰', '💎', '🧰',
    '🔨', '🧱', '🧲', '💣', '🧨', '🎩', '🔮', '📿',
    '💈', '🔭', '💊', '🧬', '🦠', '🧪', '🧹', '🧻',
    '🚰', '🚿', '🧼', '🧽', '🔑', '🚪', '🧸', '🎁',
    '🎈', '🎀', '🎊', '🎎', '🎐', '🧧', '📥', '📦',
    '📯', '📄', '🧾', '📈', '📅', '📋', '📰', '📓',
    '📖', '🔖', '🔗', '📐', '📏', '📌', '📍', '🔍',
];

#[derive(Debug, Error)]
pub enum RandError {
    #[error("flag '--format' is incompatible with flag '--dictionary'")]
    IncompatibleFlags,
    #[error("positional argument <length> {0:?} is not a valid number")]
    InvalidLength(String),
    #[error("invalid value '{0}' for flag '--format'; options are {}", format_names())]
    InvalidFormat(String),
    #[error("dice needs at least one face")]
    NoDiceFaces,
    #[error("dictionary {} has no words", .0.display())]
    EmptyDictionary(PathBuf),
    #[error("read dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandFormat {
    #[default]
    Ascii,
    Alphanumeric,
    Alphabet,
    Hex,
    Decimal,
    Lower,
    Upper,
    Emoji,
    Raw,
    Dice,
    Uuid,
}

impl RandFormat {
    pub const ALL: [RandFormat; 11] = [
        RandFormat::Ascii,
        RandFormat::Alphanumeric,
        RandFormat::Alphabet,
        RandFormat::Hex,
        RandFormat::Decimal,
        RandFormat::Lower,
        RandFormat::Upper,
        RandFormat::Emoji,
        RandFormat::Raw,
        RandFormat::Dice,
        RandFormat::Uuid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RandFormat::Ascii => "ascii",
            RandFormat::Alphanumeric => "alphanumeric",
            RandFormat::Alphabet => "alphabet",
            RandFormat::Hex => "hex",
            RandFormat::Decimal => "dec",
            RandFormat::Lower => "lower",
            RandFormat::Upper => "upper",
            RandFormat::Emoji => "emoji",
            RandFormat::Raw => "raw",
            RandFormat::Dice => "dice",
            RandFormat::Uuid => "uuid",
        }
    }
}

fn format_names() -> String {
    RandFormat::ALL
        .iter()
        .map(|format| format.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for RandFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RandFormat {
    type Err = RandError;

    /// Case-insensitive; the empty string is the default format.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "" | "ascii" => Ok(RandFormat::Ascii),
            "alphanumeric" => Ok(RandFormat::Alphanumeric),
            "alphabet" => Ok(RandFormat::Alphabet),
            "hex" | "hexadecimal" => Ok(RandFormat::Hex),
            "dec" | "decimal" => Ok(RandFormat::Decimal),
            "lower" => Ok(RandFormat::Lower),
            "upper" => Ok(RandFormat::Upper),
            "emoji" => Ok(RandFormat::Emoji),
            "raw" => Ok(RandFormat::Raw),
            "dice" => Ok(RandFormat::Dice),
            "uuid" => Ok(RandFormat::Uuid),
            _ => Err(RandError::InvalidFormat(value.to_string())),
        }
    }
}

/// Where the output comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandSource {
    Format(RandFormat),
    Dictionary(PathBuf),
}

/// A validated `rand` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandRequest {
    pub source: RandSource,
    pub length: usize,
}

impl RandRequest {
    /// Validate raw command-line values.
    pub fn from_args(
        length: Option<&str>,
        format: Option<&str>,
        dictionary: Option<&Path>,
    ) -> Result<Self, RandError> {
        let format = format.filter(|value| !value.is_empty());
        let source = match (dictionary, format) {
            (Some(_), Some(_)) => return Err(RandError::IncompatibleFlags),
            (Some(path), None) => RandSource::Dictionary(path.to_path_buf()),
            (None, Some(value)) => RandSource::Format(value.parse()?),
            (None, None) => RandSource::Format(RandFormat::default()),
        };
        let length = match length {
            Some(arg) => arg
                .parse::<usize>()
                .map_err(|_| RandError::InvalidLength(arg.to_string()))?,
            None => default_length(&source),
        };
        Ok(Self { source, length })
    }
}

fn default_length(source: &RandSource) -> usize {
    match source {
        RandSource::Dictionary(_) => DEFAULT_WORDS,
        RandSource::Format(RandFormat::Dice) => DEFAULT_DICE,
        RandSource::Format(_) => DEFAULT_LENGTH,
    }
}

/// Generated output: text gets a trailing newline when printed, raw bytes
/// are written untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandOutput {
    Text(String),
    Bytes(Vec<u8>),
}

pub fn generate<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
    request: &RandRequest,
) -> Result<RandOutput, RandError> {
    match &request.source {
        RandSource::Dictionary(path) => {
            let words = load_dictionary(path)?;
            Ok(RandOutput::Text(random_words(rng, &words, request.length)))
        }
        RandSource::Format(format) => generate_format(rng, *format, request.length),
    }
}

fn generate_format<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
    format: RandFormat,
    length: usize,
) -> Result<RandOutput, RandError> {
    let charset = match format {
        RandFormat::Ascii => ASCII,
        RandFormat::Alphanumeric => ALPHANUMERIC,
        RandFormat::Alphabet => ALPHABET,
        RandFormat::Hex => HEX,
        RandFormat::Decimal => DECIMAL,
        RandFormat::Lower => LOWER,
        RandFormat::Upper => UPPER,
        RandFormat::Raw => return Ok(RandOutput::Bytes(random_bytes(rng, length))),
        RandFormat::Emoji => {
            return Ok(RandOutput::Text(emoji_fingerprint(&random_bytes(
                rng, length,
            ))))
        }
        RandFormat::Dice => {
            if length == 0 {
                return Err(RandError::NoDiceFaces);
            }
            return Ok(RandOutput::Text(rng.gen_range(1..=length).to_string()));
        }
        RandFormat::Uuid => {
            let uuid = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
            return Ok(RandOutput::Text(uuid.to_string()));
        }
    };
    Ok(RandOutput::Text(random_string(rng, length, charset)))
}

pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &[u8]) -> String {
    (0..length)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect()
}

pub fn random_bytes<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// One pictograph per byte.
pub fn emoji_fingerprint(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| EMOJI[usize::from(*b)])
        .collect()
}

/// One word per non-empty line, surrounding whitespace trimmed.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>, RandError> {
    let text = fs::read_to_string(path).map_err(|source| RandError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(RandError::EmptyDictionary(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}

pub fn random_words<R: Rng + ?Sized>(rng: &mut R, words: &[String], count: usize) -> String {
    (0..count)
        .filter_map(|_| words.choose(rng).map(String::as_str))
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}
