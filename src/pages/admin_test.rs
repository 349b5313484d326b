use super::*;

fn ong(id: i32, nome: &str, ativo: bool) -> Ong {
    Ong {
        id,
        nome: nome.to_owned(),
        cnpj: "12.345.678/0001-90".to_owned(),
        endereco: "Rua A, 1".to_owned(),
        telefone: "11 5555-0000".to_owned(),
        ativo,
    }
}

fn interesse(id: i32, cpf: &str, id_animal: i32, status: &str) -> Interesse {
    Interesse {
        id,
        cpf_adotante: cpf.to_owned(),
        id_animal,
        status: status.to_owned(),
    }
}

#[test]
fn ong_nome_resolves_known_ids() {
    let ongs = vec![ong(1, "Patinhas", true), ong(2, "Focinhos", false)];
    assert_eq!(ong_nome(&ongs, 1), "Patinhas");
    assert_eq!(ong_nome(&ongs, 2), "Focinhos");
}

#[test]
fn ong_nome_keeps_unknown_ids_visible() {
    assert_eq!(ong_nome(&[], 42), "ONG 42");
}

#[test]
fn situacao_chip_distinguishes_active() {
    assert_eq!(situacao_chip(true), ("Ativa", "chip chip--aprovado"));
    assert_eq!(situacao_chip(false), ("Inativa", "chip chip--recusado"));
}

#[test]
fn contagem_counts_by_status() {
    let interesses = vec![
        interesse(1, "1", 1, "PENDENTE"),
        interesse(2, "1", 2, "PENDENTE"),
        interesse(3, "2", 1, "APROVADO"),
        interesse(4, "3", 3, "RECUSADO"),
        interesse(5, "3", 4, "OUTRO"),
    ];

    let c = contagem(&interesses);

    assert_eq!(c.pendentes, 2);
    assert_eq!(c.aprovados, 1);
    assert_eq!(c.recusados, 1);
}

#[test]
fn adocao_rows_join_names_and_keep_orphans() {
    let animais = vec![Animal {
        id: 1,
        id_ong: 1,
        nome: "Rex".to_owned(),
        tipo: "CACHORRO".to_owned(),
        porte: String::new(),
        sexo: "M".to_owned(),
        vacinado: false,
        descricao: String::new(),
        image_url: String::new(),
    }];
    let adotantes = vec![Adotante {
        cpf: "12345678901".to_owned(),
        nome: "Maria".to_owned(),
        telefone: String::new(),
    }];
    let interesses = vec![
        interesse(1, "12345678901", 1, "APROVADO"),
        interesse(2, "99999999999", 7, "PENDENTE"),
    ];

    let rows = adocao_rows(&interesses, &animais, &adotantes);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].pet_nome, "Rex");
    assert_eq!(rows[0].adotante_nome, "Maria");
    assert_eq!(rows[1].pet_nome, "Pet não disponível");
    assert_eq!(rows[1].adotante_nome, "999.999.999-99");
}

#[test]
fn check_line_reports_count_or_error() {
    let (ok_text, ok_class) = check_line(&Ok(12));
    assert_eq!(ok_text, "OK · 12 registros");
    assert_eq!(ok_class, "sys-check sys-check--ok");

    let (err_text, err_class) = check_line(&Err(ApiError::Status(500)));
    assert!(err_text.contains("500"));
    assert_eq!(err_class, "sys-check sys-check--fail");
}

#[test]
fn health_line_covers_all_states() {
    let (online, class) = health_line(&HealthStatus::Online { latency_ms: 40 });
    assert_eq!(online, "Online · 40 ms");
    assert_eq!(class, "sys-check sys-check--ok");

    let (degraded, class) = health_line(&HealthStatus::Degraded { status: 502 });
    assert_eq!(degraded, "Instável · HTTP 502");
    assert_eq!(class, "sys-check sys-check--warn");

    let (offline, class) = health_line(&HealthStatus::Offline);
    assert_eq!(offline, "Servidor offline");
    assert_eq!(class, "sys-check sys-check--fail");
}
