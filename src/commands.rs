//! Built-in command help.

use crate::usage::{CommandDoc, FlagDoc};

/// Program name shown in built-in help.
pub const PROGRAM: &str = "step";

const RAND_FLAGS: &[FlagDoc] = &[
    FlagDoc {
        name: "format",
        aliases: &[],
        placeholder: Some("format"),
        usage: "The <format> of the output string. See help for list of available formats.",
    },
    FlagDoc {
        name: "dictionary",
        aliases: &["dict"],
        placeholder: Some("file"),
        usage: "The <file> to use as a dictionary to get random words.",
    },
];

const RAND_DESCRIPTION: &str = r#"**step rand** generates random strings that can be used for multiple purposes.
The <rand> command supports printing strings with different formats. It defaults
to use the printable characters of the ASCII table; <rand> also supports
generating a memorable password using words from a provided dictionary.

The length of the random string will default to 32 characters or 6 words
separated by a dash (-) if a dictionary is used.

The list of supported formats is the following:

* ascii: generates a random string using the 94 printable characters of the
  ASCII table.
* alphanumeric: uses the 62 alphanumeric characters in the POSIX/C locale
  (a-z+A-Z+0-9).
* alphabet: uses the 52 alphabetic characters in the POSIX/C locale (a-z+A-Z).
* hex: uses the 16 hexadecimal characters in lowercase (0-9+a-f).
* dec: uses the 10 decimal characters (0-9).
* lower: uses the 26 lowercase alphabetic characters in the POSIX/C locale
  (a-z).
* upper: uses the 26 uppercase alphabetic characters in the POSIX/C locale
  (A-Z).
* emoji: uses a list of 256 pictographs, one per random byte.
* raw: uses random bytes.

The following special formats are also supported:

* dice: generates a random number between 1 and 6 or the given argument,
* uuid: generates a UUIDv4.

## POSITIONAL ARGUMENTS

<length>
:  The length of the random string in characters or words. If the dice format
is used, the length is the maximum number of the dice.

## EXAMPLES

Generate a random string using the default format (ascii) and length (32):
'''
$ step rand
Ijghm(Y?pfZiTPkHv0Z=1@MC<n&gsMe|
'''

Generate a random memorable string using a dictionary words:
'''
$ step rand --dictionary words.txt
scalpel-elan-fulsome-BELT-warring-balcony
'''

Generates a random roll of dice:
'''
$ step rand --format dice
4
'''

Generates a random hexadecimal string of 16 characters:
'''
$ step rand --format hex 16
f86a3f7b9299a413
'''

Generates 20 upper-case characters:
'''
$ step rand --format upper 20
LMCKDYUMRVJTTTZIKWGG
'''"#;

pub const RAND: CommandDoc = CommandDoc {
    name: "rand",
    usage: "generate random strings",
    usage_text: "**step rand** [<length>] [**--format**=<format>] [**--dictionary**=<file>]",
    description: RAND_DESCRIPTION,
    flags: RAND_FLAGS,
};

pub fn builtin_docs() -> &'static [CommandDoc] {
    &[RAND]
}

pub fn find_doc(name: &str) -> Option<&'static CommandDoc> {
    builtin_docs().iter().find(|doc| doc.name == name)
}

pub fn doc_names() -> Vec<&'static str> {
    builtin_docs().iter().map(|doc| doc.name).collect()
}
