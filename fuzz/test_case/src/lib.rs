use svelte_scanner::{Lexer, Scanner, StrLexer, TagStack, ValidSymbols};

static MARKUP: &[&str] = &[
    "<",
    "/>",
    "</",
    ">",
    "\"",
    "\'",
    "`",
    "\\",
    " = ",
    "{",
    "}",
    "{#await ",
    "{#each ",
    " then ",
    " as ",
    ")",
    "<p>",
    "</p>",
    "<li>",
    "<td>",
    "<tr>",
    "<br>",
    "<Widget>",
    "</widget>",
    "<script>",
    "</script>",
    "<style>",
    "</STYLE>",
    "<!-",
    "<!--",
    "->",
    "-->",
    "svelte:head",
    "       ",
    "\n\r\n\r\r\t",
];

const MAX_SCANS: usize = 10_000;

fn get_byte(data: &mut &[u8]) -> u8 {
    let Some((first, rest)) = (*data).split_first() else {
        return 1;
    };
    *data = rest;
    *first
}

fn get_markup(data: &mut &[u8]) -> String {
    let len = get_byte(data) as usize;

    (0..len)
        .map(|_| MARKUP[get_byte(data) as usize % MARKUP.len()])
        .collect()
}

/// Drives the scanner over generated markup with arbitrary valid symbol sets
/// and checks that the state survives persistence after every token.
pub fn run_scanner(mut data: &[u8]) {
    let input = get_markup(&mut data);
    let mut scanner = Scanner::new();
    let mut lexer = StrLexer::new(&input);

    for _ in 0..MAX_SCANS {
        if lexer.lookahead().is_none() && scanner.tags().is_empty() {
            break;
        }

        let valid_symbols = ValidSymbols::from_bits_truncate(u16::from_le_bytes([
            get_byte(&mut data),
            get_byte(&mut data),
        ]));

        if scanner.scan(&mut lexer, valid_symbols).is_some() {
            assert!(lexer.token_end() <= input.len());

            lexer.next_token();
        } else {
            lexer.reset_token();

            if lexer.lookahead().is_none() {
                break;
            }

            lexer.consume();
            lexer.next_token();
        }

        let state = scanner.serialize_to_vec();
        let mut restored = Scanner::new();

        restored.deserialize(&state);

        assert_eq!(restored.tags().len(), scanner.tags().len());

        scanner = restored;
    }
}

/// Decodes arbitrary bytes as scanner state. Whatever decodes must survive
/// a round trip through the encoder.
pub fn run_state_decoder(data: &[u8]) {
    let Ok(tags) = TagStack::decode(data) else {
        return;
    };

    let mut buffer = [0u8; svelte_scanner::TREE_SITTER_SERIALIZATION_BUFFER_SIZE];
    let len = tags.encode_into(&mut buffer);
    let decoded = TagStack::decode(&buffer[..len]).unwrap();

    assert_eq!(decoded.len(), tags.len());
}
