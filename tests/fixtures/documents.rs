use crate::harness::{load_suite, token_kind, tokenize, tokens, ScannedToken, TemplateDriver};
use svelte_scanner::TokenKind::*;

#[test]
fn document_suite() {
    let mut failures = Vec::new();

    for case in load_suite().documents {
        let expected: Vec<ScannedToken> = case
            .tokens
            .iter()
            .map(|(kind, text)| (token_kind(kind), text.as_str()).into())
            .collect();

        let actual = tokenize(&case.input);

        if actual != expected {
            failures.push(format!(
                "{}\n  input:    {:?}\n  expected: {:?}\n  actual:   {:?}",
                case.description, case.input, expected, actual
            ));
        }
    }

    assert!(failures.is_empty(), "\n{}", failures.join("\n\n"));
}

#[test]
fn documents_leave_no_open_elements() {
    for case in load_suite().documents {
        let (_, open_tags) = TemplateDriver::new(&case.input).run();

        assert!(open_tags.is_empty(), "{}", case.description);
    }
}

#[test]
fn component_template() {
    let input = r#"
<script>
    export let items = [];
    let promise = load();
</script>

<svelte:head><title>{title}</title></svelte:head>

<main class="app">
    {#if items.length}
        <ul>
            {#each items.filter((item) => item.visible) as item (item.id)}
                <li>{item.label}
            {/each}
        </ul>
    {:else}
        <p>No items
    {/if}

    {#await promise then value}
        <Result {value} on:retry={() => (promise = load())} />
    {/await}
</main>

<style>
    main > ul { margin: 0 }
</style>
"#;

    assert_eq!(
        tokenize(input),
        tokens(&[
            (ScriptStartTagName, "script"),
            (RawText, "export let items = [];\n    let promise = load();\n"),
            (EndTagName, "script"),
            (StartTagName, "svelte:head"),
            (StartTagName, "title"),
            (RawTextExpr, "title"),
            (EndTagName, "title"),
            (EndTagName, "svelte:head"),
            (StartTagName, "main"),
            (RawTextExpr, "items.length"),
            (StartTagName, "ul"),
            (RawTextEach, "items.filter((item) => item.visible)"),
            (StartTagName, "li"),
            (RawTextExpr, "item.label"),
            (ImplicitEndTag, ""),
            (EndTagName, "ul"),
            (StartTagName, "p"),
            (RawTextAwait, "promise"),
            (StartTagName, "Result"),
            (RawTextExpr, "value"),
            (RawTextExpr, "() => (promise = load())"),
            (SelfClosingTagDelimiter, "/>"),
            (ImplicitEndTag, ""),
            (EndTagName, "main"),
            (StyleStartTagName, "style"),
            (RawText, "main > ul { margin: 0 }\n"),
            (EndTagName, "style"),
        ])
    );
}

#[test]
fn implicit_end_tags_are_produced_one_at_a_time() {
    let depth = 50;
    let input = "<div>".repeat(depth) + "<p>text";
    let tokens = tokenize(&input);

    let implicit_end_tags = tokens
        .iter()
        .filter(|token| token.kind == ImplicitEndTag)
        .count();

    assert_eq!(implicit_end_tags, depth + 1);
    assert!(tokens.iter().all(|token| token.kind != EndTagName));
}

#[test]
fn whitespace_before_tokens_is_skipped() {
    assert_eq!(
        tokenize("<p>{  value  }</p  >"),
        tokens(&[
            (StartTagName, "p"),
            (RawTextExpr, "value  "),
            (EndTagName, "p"),
        ])
    );
}
