//! Static data collaborator: branches, staff, products and KPI tiles shown
//! by the dashboard, plus a deterministic demo workbook for the loader.
//!
//! Everything here is a display snapshot; nothing enforces numeric
//! consistency between the arrays.

use contracts::dashboard::{Colaborador, Filial, KpiRecord, KpiValue, ProductSales};
use contracts::import::{RawSalesRow, COL_FILIAL, COL_LIQUIDO, COL_VENDA};
use std::collections::HashMap;
use uuid::Uuid;

/// Branch seed: (slug, display name, base ticket in R$).
const FILIAIS_SEED: [(&str, &str, f64); 4] = [
    ("centro", "Centro", 820.0),
    ("zona-sul", "Zona Sul", 1140.0),
    ("zona-norte", "Zona Norte", 640.0),
    ("barra", "Barra", 990.0),
];

/// Rows generated per branch in the demo workbook.
const ROWS_PER_FILIAL: usize = 30;

pub fn filiais() -> Vec<Filial> {
    FILIAIS_SEED
        .iter()
        .map(|(id, name, _)| Filial {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn colaboradores() -> Vec<Colaborador> {
    let seed: [(&str, &str, &str, &str, u32, &str, &str, &str); 8] = [
        ("ana-souza", "Ana Souza", "AS", "centro", 212, "41%", "R$ 182.400", "teal"),
        ("bruno-lima", "Bruno Lima", "BL", "centro", 187, "37%", "R$ 158.900", "blue"),
        ("carla-mendes", "Carla Mendes", "CM", "zona-sul", 176, "35%", "R$ 201.300", "purple"),
        ("diego-rocha", "Diego Rocha", "DR", "zona-sul", 154, "33%", "R$ 175.600", "amber"),
        ("elisa-prado", "Elisa Prado", "EP", "zona-norte", 131, "29%", "R$ 83.800", "rose"),
        ("fabio-torres", "Fábio Torres", "FT", "zona-norte", 118, "27%", "R$ 75.500", "green"),
        ("gabriela-nunes", "Gabriela Nunes", "GN", "barra", 167, "36%", "R$ 165.300", "indigo"),
        ("hugo-campos", "Hugo Campos", "HC", "barra", 102, "24%", "R$ 101.000", "orange"),
    ];

    seed.iter()
        .map(
            |(id, name, initials, filial, sales, conversion, revenue, color)| Colaborador {
                id: id.to_string(),
                name: name.to_string(),
                initials: initials.to_string(),
                filial: filial.to_string(),
                sales: *sales,
                conversion: conversion.to_string(),
                revenue: revenue.to_string(),
                color: color.to_string(),
            },
        )
        .collect()
}

/// Product ranking, already sorted by quantity. Intentionally longer than
/// the ten rows the card shows.
pub fn produtos() -> Vec<ProductSales> {
    let seed: [(&str, u32); 12] = [
        ("Plano Anual Premium", 342),
        ("Plano Anual Básico", 297),
        ("Consultoria Avulsa", 251),
        ("Plano Mensal Premium", 214),
        ("Plano Mensal Básico", 186),
        ("Pacote Corporativo", 143),
        ("Treinamento In Company", 121),
        ("Suporte Estendido", 98),
        ("Licença Adicional", 77),
        ("Migração de Dados", 54),
        ("Auditoria Expressa", 31),
        ("Workshop Avulso", 19),
    ];

    seed.iter()
        .map(|(name, quantity)| ProductSales {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity: *quantity,
        })
        .collect()
}

pub fn kpis() -> Vec<KpiRecord> {
    vec![
        KpiRecord {
            key: "vendas".to_string(),
            title: "Vendas no período".to_string(),
            icon: "vendas".to_string(),
            value: KpiValue::Found("1.248".to_string()),
            meta: Some("Meta: 1.500".to_string()),
            previous_value: None,
            variation: 12.4,
            is_positive: true,
        },
        KpiRecord {
            key: "receita".to_string(),
            title: "Receita líquida".to_string(),
            icon: "receita".to_string(),
            value: KpiValue::Found("R$ 1,24M".to_string()),
            meta: None,
            previous_value: Some("Anterior: R$ 1,10M".to_string()),
            variation: 8.2,
            is_positive: true,
        },
        KpiRecord {
            key: "ticket-medio".to_string(),
            title: "Ticket médio".to_string(),
            icon: "ticket".to_string(),
            value: KpiValue::Found("R$ 994".to_string()),
            meta: None,
            previous_value: Some("Anterior: R$ 1.026".to_string()),
            variation: -3.1,
            is_positive: false,
        },
        KpiRecord {
            key: "conversao".to_string(),
            title: "Taxa de conversão".to_string(),
            icon: "conversao".to_string(),
            value: KpiValue::NotFound,
            meta: None,
            previous_value: None,
            variation: 0.0,
            is_positive: true,
        },
    ]
}

/// The demo workbook as the loader sees it: one field map per spreadsheet
/// row. A couple of rows are intentionally broken so the progress widget's
/// error display has something real to show.
pub fn planilha_records() -> Vec<HashMap<String, String>> {
    let mut records = Vec::new();

    for (fi, (_, name, base)) in FILIAIS_SEED.iter().enumerate() {
        for i in 0..ROWS_PER_FILIAL {
            let venda_id = format!("V-{:02}{:03}", fi + 1, i + 1);
            // deterministic spread around the branch's base ticket
            let liquido = base + ((i * 137) % 900) as f64;
            records.push(record(name, &venda_id, &format_cell(liquido)));
        }
    }

    // broken rows: no sale id / no branch
    records.push(record("Centro", "   ", "450,00"));
    records.push(record("", "V-9999", "310,00"));

    records
}

/// The parsed workbook, broken rows dropped. Used to seed the context so
/// the dashboard has data before any demo load runs.
pub fn raw_sales_rows() -> Vec<RawSalesRow> {
    planilha_records()
        .iter()
        .filter_map(|r| RawSalesRow::from_record(r).ok())
        .collect()
}

fn record(filial: &str, venda: &str, liquido: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert(COL_FILIAL.to_string(), filial.to_string());
    map.insert(COL_VENDA.to_string(), venda.to_string());
    map.insert(COL_LIQUIDO.to_string(), liquido.to_string());
    map
}

/// pt-BR decimal cell, the way the workbook stores amounts.
fn format_cell(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_is_deterministic() {
        assert_eq!(planilha_records(), planilha_records());
    }

    #[test]
    fn test_broken_rows_are_dropped() {
        let records = planilha_records();
        let rows = raw_sales_rows();
        assert_eq!(rows.len(), records.len() - 2);
    }

    #[test]
    fn test_produtos_are_pre_sorted() {
        let produtos = produtos();
        assert!(produtos.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        assert!(produtos.len() > 10);
    }
}
