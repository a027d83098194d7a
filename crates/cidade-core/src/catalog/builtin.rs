//! Missions shipped with the application.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{MissionDefinition, MissionKind};

/// Development identifier of the flagship development.
pub(super) const CIDADE_INTELIGENTE: &str = "cidade_inteligente";

fn tasks(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn only(development_id: &str) -> Option<BTreeSet<String>> {
    Some(BTreeSet::from([development_id.to_string()]))
}

pub(super) fn general_missions() -> Vec<MissionDefinition> {
    vec![
        MissionDefinition {
            id: 1,
            kind: MissionKind::Daily,
            title: "Hidratação".to_string(),
            description: "Mantenha o corpo hidratado ao longo do dia.".to_string(),
            icon: "water".to_string(),
            points: 10,
            tasks: tasks(&[
                "Beber um copo de água ao acordar",
                "Beber 2 litros de água ao longo do dia",
            ]),
            development_ids: None,
        },
        MissionDefinition {
            id: 2,
            kind: MissionKind::Daily,
            title: "Caminhada matinal".to_string(),
            description: "Comece o dia em movimento.".to_string(),
            icon: "walk".to_string(),
            points: 20,
            tasks: tasks(&["Alongar por 5 minutos", "Caminhar por 20 minutos"]),
            development_ids: None,
        },
        MissionDefinition {
            id: 3,
            kind: MissionKind::Daily,
            title: "Alimentação saudável".to_string(),
            description: "Inclua alimentos naturais nas refeições.".to_string(),
            icon: "nutrition".to_string(),
            points: 15,
            tasks: tasks(&[
                "Comer uma fruta no café da manhã",
                "Incluir salada no almoço",
                "Evitar refrigerante",
            ]),
            development_ids: None,
        },
        MissionDefinition {
            id: 4,
            kind: MissionKind::Daily,
            title: "Momento de leitura".to_string(),
            description: "Reserve um tempo para ler.".to_string(),
            icon: "book".to_string(),
            points: 10,
            tasks: tasks(&["Ler 10 páginas de um livro"]),
            development_ids: None,
        },
        MissionDefinition {
            id: 5,
            kind: MissionKind::Daily,
            title: "Boa vizinhança".to_string(),
            description: "Fortaleça os laços com a comunidade.".to_string(),
            icon: "people".to_string(),
            points: 15,
            tasks: tasks(&[
                "Cumprimentar um vizinho",
                "Conferir os avisos da comunidade",
            ]),
            development_ids: None,
        },
    ]
}

pub(super) fn development_missions() -> BTreeMap<String, Vec<MissionDefinition>> {
    let cidade_inteligente = vec![
        MissionDefinition {
            id: 101,
            kind: MissionKind::Daily,
            title: "Explore o bairro".to_string(),
            description: "Conheça os espaços de lazer do loteamento.".to_string(),
            icon: "map".to_string(),
            points: 25,
            tasks: tasks(&["Visitar a praça central", "Conhecer a pista de caminhada"]),
            development_ids: only(CIDADE_INTELIGENTE),
        },
        MissionDefinition {
            id: 102,
            kind: MissionKind::Daily,
            title: "Coleta seletiva".to_string(),
            description: "Separe o lixo reciclável da sua casa.".to_string(),
            icon: "recycle".to_string(),
            points: 20,
            tasks: tasks(&[
                "Separar plástico, papel e vidro",
                "Levar os recicláveis ao ponto de coleta",
            ]),
            development_ids: only(CIDADE_INTELIGENTE),
        },
        MissionDefinition {
            id: 201,
            kind: MissionKind::Evolution,
            title: "Morador engajado".to_string(),
            description: "Complete seu cadastro e participe da comunidade.".to_string(),
            icon: "star".to_string(),
            points: 100,
            tasks: tasks(&[
                "Completar o perfil",
                "Cadastrar os dependentes",
                "Participar de um evento da comunidade",
            ]),
            development_ids: only(CIDADE_INTELIGENTE),
        },
        MissionDefinition {
            id: 202,
            kind: MissionKind::Evolution,
            title: "Guardião verde".to_string(),
            description: "Ajude a cuidar das áreas verdes.".to_string(),
            icon: "tree".to_string(),
            points: 150,
            tasks: tasks(&[
                "Plantar uma muda",
                "Participar de um mutirão de limpeza",
                "Completar 7 dias de coleta seletiva",
                "Indicar um vizinho para o mutirão",
            ]),
            development_ids: only(CIDADE_INTELIGENTE),
        },
    ];

    BTreeMap::from([(CIDADE_INTELIGENTE.to_string(), cidade_inteligente)])
}
