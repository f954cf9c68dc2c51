//! Curated Portuguese word lists for text analysis.
//!
//! Passive auxiliaries and participles, adverbs, conjunctions, discourse
//! connectors, stop words, accessibility vocabularies, and the LSI synonym
//! table used by the SEO analyzer.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Forms of "ser", "estar" and "ficar" that introduce passive constructions.
pub static PASSIVE_AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "é", "são", "foi", "foram", "era", "eram", "será", "serão", "seria", "seriam", "sido",
        "sendo", "ser", "fora", "seja", "sejam", "fosse", "fossem", "está", "estão", "estava",
        "estavam", "esteve", "estiveram", "ficou", "ficaram", "fica", "ficam",
    ]
    .into_iter()
    .collect()
});

/// Irregular past participles that do not end in -ado/-ido.
pub static IRREGULAR_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "feito", "feita", "feitos", "feitas", "dito", "dita", "ditos", "ditas", "escrito",
        "escrita", "escritos", "escritas", "visto", "vista", "vistos", "vistas", "posto", "posta",
        "aberto", "aberta", "abertos", "abertas", "coberto", "coberta", "descoberto",
        "descoberta", "aceito", "aceita", "entregue", "entregues", "ganho", "gasto", "pago",
        "paga", "pagos", "morto", "morta", "preso", "presa", "eleito", "eleita", "expresso",
        "impresso", "suspenso", "solto", "salvo", "limpo", "aceso", "frito", "composto",
        "proposto", "proposta", "imposto", "disposto", "exposto",
    ]
    .into_iter()
    .collect()
});

/// Common adverbs that do not end in -mente.
pub static COMMON_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "muito", "pouco", "bastante", "demais", "sempre", "nunca", "jamais", "já", "ainda",
        "logo", "agora", "hoje", "ontem", "amanhã", "cedo", "tarde", "aqui", "ali", "lá", "cá",
        "acolá", "longe", "perto", "bem", "mal", "assim", "depressa", "devagar", "talvez",
        "quase", "apenas", "somente", "também", "só", "tão", "tanto", "mais", "menos",
    ]
    .into_iter()
    .collect()
});

/// Conjunctions counted as a detail of long sentences.
pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "e", "mas", "porém", "contudo", "todavia", "entretanto", "ou", "porque", "pois", "que",
        "se", "quando", "embora", "como", "portanto", "enquanto", "conforme", "caso", "nem",
    ]
    .into_iter()
    .collect()
});

/// Discourse connectors.
///
/// Matching is per single token, so the multi-word entries at the end of
/// the list never match.
pub static DISCOURSE_CONNECTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "porém",
        "contudo",
        "todavia",
        "entretanto",
        "portanto",
        "logo",
        "assim",
        "então",
        "consequentemente",
        "finalmente",
        "primeiramente",
        "ademais",
        "outrossim",
        "igualmente",
        "similarmente",
        "analogamente",
        "inclusive",
        "sobretudo",
        "principalmente",
        "especialmente",
        "enfim",
        "afinal",
        "aliás",
        "também",
        "embora",
        "conquanto",
        "apesar",
        "mas",
        "pois",
        "porque",
        "caso",
        "enquanto",
        "conforme",
        "segundo",
        "posteriormente",
        "anteriormente",
        "simultaneamente",
        "nem",
        "além",
        "inclusivamente",
        "além disso",
        "por outro lado",
        "no entanto",
        "por exemplo",
        "ou seja",
        "isto é",
        "em suma",
        "por fim",
        "em primeiro lugar",
        "dessa forma",
        "desse modo",
        "por conseguinte",
        "de fato",
    ]
    .into_iter()
    .collect()
});

/// Portuguese stop words ignored by keyword extraction.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "o", "as", "os", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das", "em",
        "no", "na", "nos", "nas", "por", "pelo", "pela", "pelos", "pelas", "para", "com", "sem",
        "sob", "sobre", "entre", "até", "desde", "ao", "aos", "à", "às", "e", "ou", "mas", "que",
        "se", "como", "quando", "porque", "pois", "já", "não", "sim", "mais", "menos", "muito",
        "muita", "muitos", "muitas", "pouco", "também", "só", "eu", "tu", "ele", "ela", "nós",
        "vós", "eles", "elas", "você", "vocês", "me", "te", "lhe", "vos", "lhes", "meu",
        "minha", "seu", "sua", "seus", "suas", "nosso", "nossa", "este", "esta", "estes",
        "estas", "esse", "essa", "esses", "essas", "isso", "isto", "aquele", "aquela",
        "aquilo", "ser", "é", "são", "foi", "foram", "era", "eram", "está", "estão", "estar",
        "ter", "tem", "têm", "tinha", "há", "haver", "vai", "vão", "pode", "podem", "cada",
        "todo", "toda", "todos", "todas", "qual", "quais", "onde", "então", "assim", "ainda",
        "bem", "aqui", "ali", "lá", "outro", "outra", "outros", "outras", "mesmo", "mesma",
    ]
    .into_iter()
    .collect()
});

/// Words considered hard to process regardless of length.
pub static COMPLEX_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "outrossim",
        "destarte",
        "mormente",
        "hodierno",
        "precípuo",
        "supracitado",
        "retromencionado",
        "consubstanciar",
        "paradigma",
        "concernente",
        "doravante",
        "hodiernamente",
        "malgrado",
        "conquanto",
        "porquanto",
        "dirimir",
        "exarar",
        "ínsito",
        "elidir",
        "azo",
    ]
    .into_iter()
    .collect()
});

/// Pronouns whose referent is often unclear.
pub static UNCLEAR_PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "isso", "isto", "aquilo", "ele", "ela", "eles", "elas", "este", "esta", "esse", "essa",
        "aquele", "aquela", "lhe", "lhes", "cujo", "cuja",
    ]
    .into_iter()
    .collect()
});

/// Technical jargon that hurts accessibility for general readers.
pub static TECHNICAL_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "algoritmo",
        "api",
        "backend",
        "frontend",
        "framework",
        "software",
        "hardware",
        "servidor",
        "database",
        "interface",
        "protocolo",
        "criptografia",
        "deploy",
        "pipeline",
        "kpi",
        "roi",
        "benchmark",
        "metadados",
        "compliance",
        "stakeholder",
        "workflow",
        "sprint",
        "escalabilidade",
        "latência",
        "middleware",
    ]
    .into_iter()
    .collect()
});

/// Idiomatic expressions, matched as substrings of the lowercased text.
pub const IDIOMATIC_EXPRESSIONS: &[&str] = &[
    "chutar o balde",
    "pisar na bola",
    "matar dois coelhos",
    "engolir sapo",
    "pagar o pato",
    "quebrar o galho",
    "olhos da cara",
    "fazer vista grossa",
    "encher linguiça",
    "tirar o cavalo da chuva",
    "cair a ficha",
    "ficar de molho",
    "dar uma mãozinha",
    "mão no fogo",
    "segurar vela",
    "bater as botas",
    "abrir o jogo",
    "falar pelos cotovelos",
    "chover no molhado",
    "dar com os burros n'água",
];

/// Regional words that readers from other regions may not know.
pub static REGIONALISMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "uai", "trem", "bah", "tchê", "guri", "guria", "mainha", "painho", "oxente", "visse",
        "arretado", "bergamota", "macaxeira", "aipim", "jerimum", "sinaleira", "cacetinho",
        "piá", "vixe", "porreta", "mermão",
    ]
    .into_iter()
    .collect()
});

/// LSI synonym table keyed by main keyword.
pub static LSI_SYNONYMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                "marketing",
                &["publicidade", "propaganda", "divulgação", "mercado"][..],
            ),
            ("saúde", &["bem-estar", "medicina", "cuidado", "prevenção"][..]),
            ("tecnologia", &["inovação", "digital", "software", "sistema"][..]),
            ("educação", &["ensino", "aprendizagem", "escola", "formação"][..]),
            ("empresa", &["negócio", "organização", "companhia", "corporação"][..]),
            ("produto", &["item", "mercadoria", "solução", "oferta"][..]),
            ("cliente", &["consumidor", "comprador", "usuário", "público"][..]),
            ("vendas", &["comercial", "faturamento", "receita", "negócios"][..]),
            ("conteúdo", &["texto", "artigo", "material", "publicação"][..]),
            ("viagem", &["turismo", "destino", "passeio", "roteiro"][..]),
            ("dinheiro", &["finanças", "investimento", "economia", "renda"][..]),
            ("comida", &["alimentação", "culinária", "receita", "gastronomia"][..]),
        ])
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_list_has_about_fifty_entries() {
        assert!(DISCOURSE_CONNECTORS.len() >= 45);
        assert!(DISCOURSE_CONNECTORS.contains("por outro lado"));
    }

    #[test]
    fn participles_and_auxiliaries() {
        assert!(PASSIVE_AUXILIARIES.contains("foi"));
        assert!(IRREGULAR_PARTICIPLES.contains("escrito"));
    }

    #[test]
    fn synonyms_lookup() {
        let syn = LSI_SYNONYMS.get("marketing").unwrap();
        assert!(syn.contains(&"publicidade"));
    }
}
