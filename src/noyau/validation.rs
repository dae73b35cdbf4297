// src/noyau/validation.rs

/// Filtre d’entrée, à appeler avant `solve`.
///
/// Refuse : entrée vide ou blanche, dernier caractère autre qu’un chiffre, tout caractère
/// hors de `0-9 . * / + -`.
///
/// Volontairement incomplet : "1++2" ou "+1" passent ici et échouent à la tokenisation.
pub fn is_valid_equation(equation: &str) -> bool {
    if equation.trim().is_empty() {
        return false;
    }

    let dernier_ok = equation
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit());

    dernier_ok
        && equation
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '*' | '/' | '+' | '-'))
}
