error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidAlphabet(notation: String, character: char) {
            description("invalid character in motif")
            display("invalid character {:?} in motif {:?}", character, notation)
        }

        InvalidMotifGrammar(notation: String, reason: String) {
            description("malformed motif notation")
            display("malformed motif {:?}: {}", notation, reason)
        }

        ConflictingCutSpecification(notation: String) {
            description("conflicting cut-site specification")
            display(
                "motif {:?} specifies its cut site more than once; use either '^' or a single (x/y) pair",
                notation
            )
        }

        InvalidNucleaseDefinition(field: String, reason: String) {
            description("invalid nuclease definition")
            display("invalid nuclease definition; field {:?}: {}", field, reason)
        }

        UndefinedCutSite(name: String, reason: String) {
            description("cut site is not defined")
            display("cut site is not defined for {:?}: {}", name, reason)
        }

        SequenceTooShort(length: usize, required: usize) {
            description("target sequence too short")
            display("target sequence of length {} is shorter than the {} bp required", length, required)
        }

        InvariantViolation(reason: String) {
            description("coordinate invariant violated")
            display("coordinate invariant violated: {}", reason)
        }

        InvalidAnchor(reason: String) {
            description("invalid PAM-site anchor")
            display("invalid PAM-site anchor: {}", reason)
        }
    }
}

/// Shorthand for `InvalidNucleaseDefinition` errors.
pub fn invalid_definition<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Error {
    ErrorKind::InvalidNucleaseDefinition(field.into(), reason.into()).into()
}
