//! Demonstrates tokenizing a few English sentences

use treebank_tokenizer::tokenize;

fn main() {
    let examples = vec![
        (
            "Quotes",
            r#""We beat some pretty good teams to get here," Slocum said."#,
        ),
        (
            "Numbers",
            "On a $50,000 mortgage of 30 years at 8 percent, the monthly payment would be $366.88.",
        ),
        (
            "Contractions",
            "Well, we couldn't have this predictable, cliche-ridden wanna-be if she didn't.",
        ),
        ("Cannot", "I cannot cannot work under these conditions!"),
    ];

    for (name, text) in examples {
        println!("=== {} ===", name);
        println!("{}", text);
        println!("{:?}", tokenize(text));
        println!();
    }
}
