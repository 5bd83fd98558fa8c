// src/noyau/jetons.rs
//
// Classification des caractères : opérande, opérateur, précédence.
// Un jeton = un seul caractère (après conversion : une String d’un caractère).

/// Les cinq opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        if !is_operator(c) {
            return None;
        }
        Some(match c {
            '+' => Self::Plus,
            '-' => Self::Moins,
            '*' => Self::Fois,
            '/' => Self::Divise,
            _ => Self::Puissance,
        })
    }

    /// Opérateur porté par un jeton texte : exactement un caractère.
    pub fn depuis_jeton(jeton: &str) -> Option<Self> {
        let mut it = jeton.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Self::depuis_char(c),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        precedence(self.symbole())
    }
}

/// `+ -` → 1, `* /` → 2, `^` → 3, tout le reste → 0.
///
/// Le 0 sert de sentinelle « plus faible que tout ».
pub fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Chiffre décimal ou lettre : valeur opaque, sortie telle quelle par la conversion.
///
/// `²`, `½` ou `Ⅻ` (numériques non décimaux) ne sont ni l’un ni l’autre : ignorés.
pub fn is_operand(c: char) -> bool {
    c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())
}

/// Découpe un jeton texte (ex: "+3*42") en jetons d’un caractère.
pub fn eclate(jeton: &str) -> impl Iterator<Item = String> + '_ {
    jeton.chars().map(String::from)
}

/// Vrai si le jeton se lit comme un nombre (les lettres ne le sont pas).
pub fn est_numerique(jeton: &str) -> bool {
    jeton.parse::<f64>().is_ok()
}
