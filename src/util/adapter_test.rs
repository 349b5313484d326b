use super::*;
use crate::net::types::Animal;

fn animal() -> Animal {
    Animal {
        id: 7,
        id_ong: 1,
        nome: "Rex".to_owned(),
        tipo: "CACHORRO".to_owned(),
        porte: "MEDIO".to_owned(),
        sexo: "M".to_owned(),
        vacinado: true,
        descricao: "Muito brincalhão".to_owned(),
        image_url: String::new(),
    }
}

#[test]
fn dog_gets_dog_chrome() {
    let view = adapt(&animal());

    assert_eq!(view.icon, "🐶");
    assert_eq!(view.theme, "dog");
    assert_eq!(view.tag, "Cachorro");
}

#[test]
fn cat_gets_cat_chrome() {
    let mut cat = animal();
    cat.tipo = "GATO".to_owned();

    let view = adapt(&cat);

    assert_eq!(view.icon, "🐱");
    assert_eq!(view.theme, "cat");
    assert_eq!(view.tag, "Gato");
}

#[test]
fn detail_line_reads_naturally() {
    let view = adapt(&animal());
    assert_eq!(view.detalhes, "Macho • Porte médio • ✓ Vacinado");
}

#[test]
fn detail_line_skips_a_missing_size() {
    let mut stray = animal();
    stray.porte = String::new();
    stray.sexo = "F".to_owned();
    stray.vacinado = false;

    let view = adapt(&stray);

    assert_eq!(view.detalhes, "Fêmea • Não vacinado");
}

#[test]
fn backend_photo_wins_over_placeholders() {
    let mut with_photo = animal();
    with_photo.image_url = "https://cdn.exemplo.com/rex.jpg".to_owned();

    let view = adapt(&with_photo);

    assert_eq!(view.imagem, "https://cdn.exemplo.com/rex.jpg");
}

#[test]
fn placeholder_is_stable_per_animal() {
    let first = adapt(&animal());
    let again = adapt(&animal());
    assert_eq!(first.imagem, again.imagem);
    assert!(first.imagem.starts_with("https://"));

    // A different id may pick a different placeholder, but never panics.
    let mut other = animal();
    other.id = 8;
    let _ = adapt(&other);
}

#[test]
fn negative_ids_still_pick_a_placeholder() {
    let mut odd = animal();
    odd.id = -3;

    let view = adapt(&odd);

    assert!(view.imagem.starts_with("https://"));
}

#[test]
fn porte_labels() {
    assert_eq!(format_porte("PEQUENO"), "Porte pequeno");
    assert_eq!(format_porte("MEDIO"), "Porte médio");
    assert_eq!(format_porte("GRANDE"), "Porte grande");
    // Unknown values surface as-is instead of disappearing.
    assert_eq!(format_porte("GIGANTE"), "GIGANTE");
}

#[test]
fn adapt_list_preserves_order() {
    let mut second = animal();
    second.id = 8;
    second.nome = "Mimi".to_owned();
    second.tipo = "GATO".to_owned();

    let views = adapt_list(&[animal(), second]);

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].nome, "Rex");
    assert_eq!(views[1].nome, "Mimi");
}
