use crate::tokenizer::token::Token;

/// Rewrites an expected token stream into the canonical form the generated
/// tests compare against. Fixture authors report errors at inconsistent
/// granularity relative to character-token boundaries, and character runs may
/// be split arbitrarily; after this pass character runs are maximally merged
/// and a `ParseError` that interrupts a run (or trails the stream) sits in
/// front of the run it was reported within.
pub fn normalize(tokens: &mut Vec<Token>) {
    let mut x = 1;
    while x < tokens.len() {
        if tokens[x].is_character() && tokens[x - 1].is_character() {
            let Token::Character(tail) = tokens.remove(x) else {
                unreachable!()
            };
            if let Token::Character(head) = &mut tokens[x - 1] {
                head.push_str(&tail);
            }
            // Do not advance: the merged run may now border another
            // character token.
        } else if tokens[x] == Token::ParseError
            && (x == tokens.len() - 1 || (tokens[x - 1].is_character() && tokens[x + 1].is_character()))
        {
            tokens.swap(x - 1, x);
            x += 1;
        } else {
            x += 1;
        }
    }
}
