/*!
An atom, aka. a 'propositional variable'.

Atoms are named by a single uppercase (ASCII) letter, and so there are at most twenty-six atoms in any formula.

```rust
# use sos_prover::structures::atom::{self, Atom};
let p: Atom = 'P';
assert!(atom::is_atom(p));
assert!(!atom::is_atom('p'));
```
*/

/// An atom, aka. a 'variable'.
pub type Atom = char;

/// Whether the given character names an atom.
pub fn is_atom(c: char) -> bool {
    c.is_ascii_uppercase()
}
