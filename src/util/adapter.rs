//! Adapts backend animal rows into display-ready card models.
//!
//! The backend sends technical fields (`CACHORRO`, `MEDIO`, `M`); cards want
//! icons, Portuguese labels, and a photo even when the row has none. All of
//! that mapping lives here so pages never branch on wire strings.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use crate::net::types::Animal;

/// Display model for one pet card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetView {
    pub id: i32,
    pub id_ong: i32,
    pub nome: String,
    /// Species emoji for headings.
    pub icon: &'static str,
    /// CSS theme hook: `dog` or `cat`.
    pub theme: &'static str,
    /// Species label for the card badge.
    pub tag: &'static str,
    /// One-line summary: sex, size, vaccination.
    pub detalhes: String,
    pub descricao: String,
    /// Photo URL, falling back to a placeholder bank keyed by id.
    pub imagem: String,
}

// Placeholder photos for rows without an image, picked by id so the same
// animal always shows the same picture.
const DOG_PLACEHOLDERS: &[&str] = &[
    "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=640&q=80",
    "https://images.unsplash.com/photo-1517849845537-4d257902454a?w=640&q=80",
    "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=640&q=80",
];
const CAT_PLACEHOLDERS: &[&str] = &[
    "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=640&q=80",
    "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=640&q=80",
    "https://images.unsplash.com/photo-1495360010541-f48722b34f7d?w=640&q=80",
];

/// Build the card model for one animal.
pub fn adapt(animal: &Animal) -> PetView {
    let dog = animal.tipo == "CACHORRO";
    PetView {
        id: animal.id,
        id_ong: animal.id_ong,
        nome: animal.nome.clone(),
        icon: if dog { "🐶" } else { "🐱" },
        theme: if dog { "dog" } else { "cat" },
        tag: if dog { "Cachorro" } else { "Gato" },
        detalhes: detalhes_line(animal),
        descricao: animal.descricao.clone(),
        imagem: photo_for(animal),
    }
}

/// Build card models for a whole listing.
pub fn adapt_list(animais: &[Animal]) -> Vec<PetView> {
    animais.iter().map(adapt).collect()
}

/// `M`/`F` to the label users read.
pub fn format_sexo(sexo: &str) -> &'static str {
    if sexo == "M" { "Macho" } else { "Fêmea" }
}

/// Size wire value to its Portuguese label. Unknown values pass through.
pub fn format_porte(porte: &str) -> String {
    match porte {
        "PEQUENO" => "Porte pequeno".to_owned(),
        "MEDIO" => "Porte médio".to_owned(),
        "GRANDE" => "Porte grande".to_owned(),
        other => other.to_owned(),
    }
}

/// Vaccination flag to its badge label.
pub fn format_vacinado(vacinado: bool) -> &'static str {
    if vacinado { "✓ Vacinado" } else { "Não vacinado" }
}

fn detalhes_line(animal: &Animal) -> String {
    let mut parts = vec![format_sexo(&animal.sexo).to_owned()];
    let porte = format_porte(&animal.porte);
    if !porte.is_empty() {
        parts.push(porte);
    }
    parts.push(format_vacinado(animal.vacinado).to_owned());
    parts.join(" • ")
}

fn photo_for(animal: &Animal) -> String {
    if !animal.image_url.is_empty() {
        return animal.image_url.clone();
    }
    let bank = if animal.tipo == "CACHORRO" { DOG_PLACEHOLDERS } else { CAT_PLACEHOLDERS };
    let index = usize::try_from(animal.id.max(0)).unwrap_or(0) % bank.len();
    bank[index].to_owned()
}
