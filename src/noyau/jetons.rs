// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// `*` et `/`.
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Operateur::Fois | Operateur::Divise)
    }

    /// Rang de priorité (1 = `*` `/`, 2 = `+` `-`).
    /// Sert seulement à ordonner la démarche, pas à évaluer.
    pub fn rang(self) -> u8 {
        if self.est_multiplicatif() {
            1
        } else {
            2
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Opérande décimal, lu deux fois : en flottant (calcul) et en rationnel (lecture exacte).
#[derive(Clone, Debug, PartialEq)]
pub struct Nombre {
    pub texte: String,
    pub flottant: f64,
    pub exact: BigRational,
}

impl Nombre {
    /// Lit un opérande décimal (convention invariante : `.` comme séparateur).
    ///
    /// Refuse tout ce qui n’est pas `chiffres[.chiffres]` : vide, signe, exposant,
    /// `inf`/`NaN`, double point.
    pub fn lire(texte: &str, position: usize) -> Result<Nombre, ErreurCalcul> {
        let invalide = || ErreurCalcul::OperandeInvalide {
            texte: texte.to_string(),
            position,
        };

        let forme_ok = texte.chars().all(|c| c.is_ascii_digit() || c == '.')
            && texte.chars().filter(|c| *c == '.').count() <= 1
            && texte.chars().any(|c| c.is_ascii_digit());
        if !forme_ok {
            return Err(invalide());
        }

        let flottant: f64 = texte.parse().map_err(|_| invalide())?;

        let (entier, fraction) = texte.split_once('.').unwrap_or((texte, ""));
        let chiffres = format!("{entier}{fraction}");
        let numer = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
        let denom = BigInt::from(10).pow(fraction.len() as u32);

        Ok(Nombre {
            texte: texte.to_string(),
            flottant,
            exact: BigRational::new(numer, denom),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(Nombre),
    Op(Operateur),
}

/// Découpe une équation en jetons alternés : Nombre, Op, Nombre, …, Nombre.
///
/// Tout ce qui n’est pas un opérateur s’accumule dans le tampon courant ; chaque
/// opérateur vide le tampon. Un `-` en tête donne donc un opérande vide (erreur),
/// pas un nombre négatif.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let mut debut = 0;

    for (i, c) in s.char_indices() {
        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Jeton::Nombre(Nombre::lire(&s[debut..i], debut)?));
            out.push(Jeton::Op(op));
            debut = i + c.len_utf8();
        }
    }
    out.push(Jeton::Nombre(Nombre::lire(&s[debut..], debut)?));

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Nombre(n) => n.texte.clone(),
            Jeton::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
