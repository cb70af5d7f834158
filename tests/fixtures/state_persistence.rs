use crate::harness::{load_suite, scanner_with_open_tags, tag_names, TemplateDriver};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use svelte_scanner::{Scanner, TokenKind, TREE_SITTER_SERIALIZATION_BUFFER_SIZE};

const FRAGMENTS: &[&str] = &[
    "<div>",
    "</div>",
    "<p>",
    "</p>",
    "<ul>",
    "<li>",
    "</ul>",
    "<br>",
    "<img/>",
    "<Widget>",
    "</Widget>",
    "<svelte:fragment>",
    "</svelte:fragment>",
    "<table>",
    "<tr>",
    "<td>",
    "</table>",
    "<dl>",
    "<dt>",
    "<dd>",
    "</span>",
    "text ",
    "{value}",
    "{#each list as item}",
    "{/each}",
    "{#await p then v}",
    "{/await}",
    "<!-- note -->",
    "<script>let a = '</p>';</script>",
    "<style>p {}</style>",
    "<input value={x}>",
    "<Modal on:close={() => (open = false)} />",
];

const TAG_NAMES: &[&str] = &[
    "div", "p", "li", "br", "script", "Widget", "svelte:head", "x-custom-element", "TD", "option",
];

fn random_template(rng: &mut StdRng) -> String {
    let len = rng.gen_range(1..40);

    (0..len)
        .map(|_| *FRAGMENTS.choose(rng).unwrap())
        .join("")
}

#[test]
fn reloaded_state_produces_identical_tokens() {
    for case in load_suite().documents {
        let expected = TemplateDriver::new(&case.input).run();

        for seed in 0..16 {
            let actual = TemplateDriver::new(&case.input)
                .with_state_reloads(seed)
                .run();

            assert_eq!(actual, expected, "{} (seed {seed})", case.description);
        }
    }
}

#[test]
fn random_templates_are_reparse_stable() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let input = random_template(&mut rng);
        let expected = TemplateDriver::new(&input).run();
        let seed = rng.gen_range(0..u64::MAX);

        let actual = TemplateDriver::new(&input)
            .with_state_reloads(seed)
            .run();

        assert_eq!(actual, expected, "input: {input:?}, seed: {seed}");
        assert!(actual.1.is_empty(), "input: {input:?}");
    }
}

#[test]
fn serialization_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let names: Vec<&str> = (0..rng.gen_range(0..64))
            .map(|_| *TAG_NAMES.choose(&mut rng).unwrap())
            .collect();

        let scanner = scanner_with_open_tags(&names);
        let state = scanner.serialize_to_vec();
        let mut restored = Scanner::new();

        restored.deserialize(&state);

        assert_eq!(restored.tags(), scanner.tags(), "{names:?}");
        assert_eq!(restored.serialize_to_vec(), state, "{names:?}");
    }
}

#[test]
fn truncated_state_preserves_stack_depth() {
    let names: Vec<String> = (0..300).map(|i| format!("component-{i:03}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let scanner = scanner_with_open_tags(&names);
    let state = scanner.serialize_to_vec();

    assert_eq!(state.len(), TREE_SITTER_SERIALIZATION_BUFFER_SIZE);

    let mut restored = Scanner::new();

    restored.deserialize(&state);

    let restored_names = tag_names(&restored);

    // NOTE: each record takes 15 bytes, so 68 of them fit after the header.
    assert_eq!(restored_names.len(), 300);
    assert_eq!(restored_names[..68], names[..68]);
    assert!(restored_names[68..].iter().all(String::is_empty));
}

#[test]
fn truncated_state_still_unwinds_every_open_element() {
    let input = (0..300).map(|i| format!("<component-{i:03}>")).join("");

    for seed in 0..4 {
        let (tokens, open_tags) = TemplateDriver::new(&input).with_state_reloads(seed).run();

        let implicit_end_tags = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::ImplicitEndTag)
            .count();

        assert_eq!(implicit_end_tags, 300);
        assert!(open_tags.is_empty());
    }
}
