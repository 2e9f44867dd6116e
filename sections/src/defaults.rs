//! Bundled default content for every section.
//!
//! Components fall back to these when a field is absent or set to
//! [`Slot::Default`](crate::types::Slot::Default).

use crate::config::SiteConfig;
use crate::types::{
    Accent, Badge, BadgeVariant, ButtonVariant, FaqItem, HeroButton, LogoItem, RichText,
    Screenshot, TextSpan,
};
use crate::ui::IconName;

/// FAQ heading.
pub const FAQ_TITLE: &str = "Dúvidas frequentes";

/// Hero description, shared by both hero variants.
pub const HERO_DESCRIPTION: &str = "Unimos visão executiva e engenharia consultiva ágil para construir sistemas custom-first que geram eficiência operacional, dados para gestão e crescimento sustentável.";

const CONTACT_LABEL: &str = "Fale com um especialista";

/// Hero heading with the accent on the closing phrase.
pub fn hero_title() -> RichText {
    RichText::Spans(vec![
        TextSpan::plain("Software sob medida, feito para o "),
        TextSpan::accented("seu processo", Accent::Primary),
    ])
}

/// Hero lead paragraph.
pub fn hero_description() -> RichText {
    RichText::from(HERO_DESCRIPTION)
}

/// Outline badge with a "talk to a specialist" link to the site's contact URL.
pub fn hero_badge(site: &SiteConfig) -> Badge {
    Badge::new(BadgeVariant::Outline, "Engenharia consultiva ágil")
        .with_link(CONTACT_LABEL, site.get_started_url.clone())
        .with_class("animate-appear")
}

/// Contact button and a glowing "how we work" link.
pub fn hero_buttons() -> Vec<HeroButton> {
    vec![
        HeroButton::new("#contato", CONTACT_LABEL).variant(ButtonVariant::Default),
        HeroButton::new("#processo", "Veja como trabalhamos")
            .variant(ButtonVariant::Glow)
            .icon_right(IconName::ArrowRight),
    ]
}

/// Dashboard screenshot with light and dark sources.
pub fn hero_mockup() -> Screenshot {
    Screenshot {
        src_light: "/dashboard-light.png".into(),
        src_dark: Some("/dashboard-dark.png".into()),
        alt: "Launch UI app screenshot 1".into(),
        width: 1248,
        height: 765,
    }
}

/// Showcase images cycling through the marquee hero.
pub fn marquee_images() -> Vec<String> {
    (1..=16)
        .map(|n| format!("/showcase/project-{n:02}.png"))
        .collect()
}

/// Logos heading, accenting the two value words.
pub fn logos_title() -> RichText {
    RichText::Spans(vec![
        TextSpan::plain("Foco em "),
        TextSpan::accented("Eficiência", Accent::BrandUnderline),
        TextSpan::plain(" e "),
        TextSpan::accented("Valor Tangível", Accent::BrandUnderline),
        TextSpan::plain(", não promessas vazias"),
    ])
}

/// Brand-colored outline badge above the logos heading.
pub fn logos_badge() -> Badge {
    Badge::new(BadgeVariant::Outline, "Consultoria e desenvolvimento ágil")
        .with_class("border-brand text-brand")
}

/// Value propositions shown in the logos row.
pub fn logos() -> Vec<LogoItem> {
    vec![
        LogoItem::new(IconName::Coins, "MVP em semanas"),
        LogoItem::new(IconName::Clock, "Foco em eficiência"),
        LogoItem::new(IconName::Rocket, "Ativos reais e customizados"),
    ]
}

/// The bundled questions, in display order.
pub fn faq_items() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "Em quanto tempo entregam um MVP?",
            [
                "Em geral, falamos de semanas (não meses), conforme escopo definido no Blueprint. Um MVP típico fica pronto entre 4 e 8 semanas após a fase de descoberta.",
            ],
        ),
        FaqItem::new(
            "Como garantem que o sistema não vira 'mais um Frankenstein'?",
            [
                "Priorizamos arquitetura modular, código limpo e padrões de engenharia comprovados. Cada entrega passa por revisão técnica rigorosa antes de avançar.",
                "Trabalhamos com critérios de aceitação objetivos e testes automatizados, evitando que débito técnico se acumule. A evolução acontece em ciclos curtos e controlados.",
            ],
        ),
        FaqItem::new(
            "Vocês substituem ou integram com o que já existe?",
            [
                "Depende do caso: quando possível, integramos para preservar o que funciona e acelerar valor. Avaliamos cada sistema existente na fase de descoberta.",
            ],
        ),
        FaqItem::new(
            "Qual é o custo típico?",
            [
                "Orçamos por etapas. O MVP é fatiado para entregar o 80/20 que gera resultado rápido. Após a descoberta inicial, apresentamos uma proposta detalhada com investimento e retorno esperado.",
            ],
        ),
        FaqItem::new(
            "Como medem sucesso?",
            [
                "Definimos métricas logo no início (tempo, custo, erros, receita), acompanhadas a cada ciclo. O sucesso é mensurável desde o primeiro MVP.",
            ],
        ),
        FaqItem::new(
            "Preciso ter time interno de tecnologia?",
            [
                "Não é obrigatório. Atuamos como parceiro consultivo e técnico, com transferência de conhecimento. Se você tiver time, trabalhamos em conjunto; se não, assumimos a execução.",
            ],
        ),
        FaqItem::new(
            "Por que não usar IA generativa ou no-code para criar o sistema?",
            [
                "Ferramentas de IA podem gerar código rapidamente, mas sistemas de produção exigem arquitetura sólida, segurança, escalabilidade e manutenibilidade, áreas onde prompts e no-code ficam limitados.",
                "Um sistema \"promptado\" por não-desenvolvedores pode funcionar inicialmente, mas tende a colapsar sob carga real, mudanças de requisitos ou necessidade de integrações complexas.",
                "Nossa equipe domina as tecnologias modernas (incluindo IA como ferramenta auxiliar) para construir sistemas que escalam, se adaptam e sobrevivem ao tempo.",
            ],
        ),
        FaqItem::new(
            "Quais tecnologias vocês utilizam?",
            [
                "Escolhemos a stack conforme o contexto do projeto. Trabalhamos com tecnologias modernas e maduras: React, Next.js, Node.js, Python, TypeScript, bancos SQL e NoSQL, cloud (AWS, GCP, Azure).",
                "Também integramos IA onde faz sentido: automação, análise de dados, assistentes inteligentes, sempre com foco em valor real, não em hype.",
            ],
        ),
        FaqItem::new(
            "E depois do MVP? Vocês fazem manutenção e evolução?",
            [
                "Sim. Após o MVP, você pode optar por evoluções incrementais, manutenção contínua ou apenas suporte pontual. Trabalhamos em modelo de parceria de longo prazo ou entregas por demanda.",
            ],
        ),
        FaqItem::new(
            "Como funciona a comunicação durante o projeto?",
            [
                "Transparência total. Você recebe atualizações regulares (semanal ou quinzenal), acesso ao backlog, demos das entregas e contato direto com a equipe técnica.",
                "Evitamos surpresas: problemas são escalados imediatamente, e você participa das decisões importantes sobre arquitetura e prioridades.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_bundled_faq_items_without_explicit_values() {
        let items = faq_items();
        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|item| item.value.is_none() && !item.answer.is_empty()));
    }

    #[test]
    fn hero_badge_links_to_site_contact() {
        let site = SiteConfig {
            get_started_url: "https://example.com/contact".into(),
            ..Default::default()
        };
        let badge = hero_badge(&site);
        assert_eq!(badge.link.map(|l| l.href).as_deref(), Some("https://example.com/contact"));
    }
}
