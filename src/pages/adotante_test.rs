use super::*;

fn animal(id: i32, nome: &str, tipo: &str) -> Animal {
    Animal {
        id,
        id_ong: 1,
        nome: nome.to_owned(),
        tipo: tipo.to_owned(),
        porte: "PEQUENO".to_owned(),
        sexo: "M".to_owned(),
        vacinado: true,
        descricao: String::new(),
        image_url: String::new(),
    }
}

fn interesse(id: i32, id_animal: i32, status: &str) -> Interesse {
    Interesse {
        id,
        cpf_adotante: "12345678901".to_owned(),
        id_animal,
        status: status.to_owned(),
    }
}

#[test]
fn rows_join_interest_with_animal() {
    let animais = vec![animal(7, "Rex", "CACHORRO"), animal(9, "Mimi", "GATO")];
    let interesses = vec![interesse(1, 9, "PENDENTE")];

    let rows = build_rows(&interesses, &animais);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].pet_nome, "Mimi");
    assert_eq!(rows[0].pet_icon, "🐱");
    assert!(rows[0].pendente);
}

#[test]
fn rows_keep_interests_whose_animal_left_the_listing() {
    let interesses = vec![interesse(4, 99, "APROVADO")];

    let rows = build_rows(&interesses, &[]);

    assert_eq!(rows[0].pet_nome, "Pet não disponível");
    assert_eq!(rows[0].pet_icon, "🐾");
    assert!(!rows[0].pendente);
}

#[test]
fn rows_preserve_backend_order() {
    let animais = vec![animal(1, "A", "CACHORRO"), animal(2, "B", "GATO")];
    let interesses = vec![
        interesse(10, 2, "RECUSADO"),
        interesse(11, 1, "PENDENTE"),
    ];

    let rows = build_rows(&interesses, &animais);

    assert_eq!(rows[0].pet_nome, "B");
    assert_eq!(rows[1].pet_nome, "A");
}

#[test]
fn status_chip_maps_known_statuses() {
    assert_eq!(
        status_chip("PENDENTE"),
        ("Pendente".to_owned(), "chip chip--pendente".to_owned())
    );
    assert_eq!(
        status_chip("APROVADO"),
        ("Aprovado".to_owned(), "chip chip--aprovado".to_owned())
    );
    assert_eq!(
        status_chip("RECUSADO"),
        ("Recusado".to_owned(), "chip chip--recusado".to_owned())
    );
}

#[test]
fn status_chip_passes_unknown_statuses_through() {
    let (label, class) = status_chip("EM_ANALISE");
    assert_eq!(label, "EM_ANALISE");
    assert_eq!(class, "chip chip--em_analise");
}
