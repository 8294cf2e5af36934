use serde::Serialize;

/// Who a question measures: the respondent's own habits (`Personal`, coded
/// `RP`) or the conditions the organization provides (`Organizational`,
/// coded `FO`). Each construct appears twice, once per kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionKind {
    Personal,
    Organizational,
}

impl QuestionKind {
    pub fn code(self) -> &'static str {
        match self {
            QuestionKind::Personal => "RP",
            QuestionKind::Organizational => "FO",
        }
    }

    pub fn personal_weight(self) -> u8 {
        match self {
            QuestionKind::Personal => 1,
            QuestionKind::Organizational => 0,
        }
    }

    pub fn org_weight(self) -> u8 {
        match self {
            QuestionKind::Personal => 0,
            QuestionKind::Organizational => 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Question {
    /// Stable question number; also the display order in the seeded survey.
    pub number: u32,
    pub domain: &'static str,
    pub construct: &'static str,
    pub kind: QuestionKind,
    pub text: &'static str,
    pub weight: f64,
    pub severity: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Survey {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

pub const BASE_SURVEY: Survey = Survey {
    code: "WB360",
    name: "Wellbeing 360 v2.0",
    description: "Integral wellbeing assessment",
    version: "2.0",
};

use QuestionKind::{Organizational, Personal};

/// The base survey question set. Numbers are contiguous from zero and each
/// construct contributes a Personal/Organizational pair with equal weight
/// and severity.
pub const QUESTIONS: [Question; 24] = [
    Question {
        number: 0,
        domain: "Físico",
        construct: "Bienestar corporal básico",
        kind: Personal,
        text: "¿Dormís lo suficiente como para sentirte descansado/a la mayoría de los días?",
        weight: 0.6,
        severity: 0.9,
    },
    Question {
        number: 1,
        domain: "Físico",
        construct: "Bienestar corporal básico",
        kind: Organizational,
        text: "¿Tu jornada laboral permite mantener horarios regulares de descanso?",
        weight: 0.6,
        severity: 0.9,
    },
    Question {
        number: 2,
        domain: "Físico",
        construct: "Cuidado físico diario",
        kind: Personal,
        text: "¿Te tomás pequeñas pausas o te movés unos minutos durante tu jornada?",
        weight: 0.4,
        severity: 0.8,
    },
    Question {
        number: 3,
        domain: "Físico",
        construct: "Cuidado físico diario",
        kind: Organizational,
        text: "¿El ritmo de trabajo permite hacer pausas breves cuando las necesitás?",
        weight: 0.4,
        severity: 0.8,
    },
    Question {
        number: 4,
        domain: "Nutricional",
        construct: "Hábitos alimentarios básicos",
        kind: Personal,
        text: "¿Mantenés horarios mínimos para comer sin saltearte comidas?",
        weight: 1.0,
        severity: 0.7,
    },
    Question {
        number: 5,
        domain: "Nutricional",
        construct: "Hábitos alimentarios básicos",
        kind: Organizational,
        text: "¿Podés comer sin apuros durante tu jornada laboral?",
        weight: 1.0,
        severity: 0.7,
    },
    Question {
        number: 6,
        domain: "Emocional",
        construct: "Tensión mental/emocional",
        kind: Personal,
        text: "¿Podés manejar el estrés diario sin sentirte desbordado/a?",
        weight: 0.4,
        severity: 0.9,
    },
    Question {
        number: 7,
        domain: "Emocional",
        construct: "Tensión mental/emocional",
        kind: Organizational,
        text: "¿Las exigencias del trabajo mantienen tu nivel de estrés en algo manejable?",
        weight: 0.4,
        severity: 0.9,
    },
    Question {
        number: 8,
        domain: "Emocional",
        construct: "Manejo emocional",
        kind: Personal,
        text: "¿Lográs regular tus emociones en situaciones tensas?",
        weight: 0.35,
        severity: 0.85,
    },
    Question {
        number: 9,
        domain: "Emocional",
        construct: "Manejo emocional",
        kind: Organizational,
        text: "¿El ambiente laboral favorece un clima emocional saludable?",
        weight: 0.35,
        severity: 0.85,
    },
    Question {
        number: 10,
        domain: "Emocional",
        construct: "Satisfacción emocional",
        kind: Personal,
        text: "¿Disfrutás al menos una parte de tu trabajo en el día a día?",
        weight: 0.25,
        severity: 0.7,
    },
    Question {
        number: 11,
        domain: "Emocional",
        construct: "Satisfacción emocional",
        kind: Organizational,
        text: "¿El entorno laboral favorece experiencias positivas durante la jornada?",
        weight: 0.25,
        severity: 0.7,
    },
    Question {
        number: 12,
        domain: "Social",
        construct: "Vínculos sociales",
        kind: Personal,
        text: "¿Te involucrás activamente para mantener relaciones positivas con tu equipo?",
        weight: 0.55,
        severity: 0.8,
    },
    Question {
        number: 13,
        domain: "Social",
        construct: "Vínculos sociales",
        kind: Organizational,
        text: "¿Te sentís incluido/a y bien tratado/a por tu equipo?",
        weight: 0.55,
        severity: 0.8,
    },
    Question {
        number: 14,
        domain: "Social",
        construct: "Intercambio humano",
        kind: Personal,
        text: "¿Pedís ayuda cuando realmente la necesitás?",
        weight: 0.45,
        severity: 0.7,
    },
    Question {
        number: 15,
        domain: "Social",
        construct: "Intercambio humano",
        kind: Organizational,
        text: "¿Tus compañeros suelen brindarte apoyo cuando lo necesitás?",
        weight: 0.45,
        severity: 0.7,
    },
    Question {
        number: 16,
        domain: "Familiar",
        construct: "Armonía trabajo–vida",
        kind: Personal,
        text: "¿Lográs organizar tu vida personal sin que se vea afectada constantemente por el trabajo?",
        weight: 0.6,
        severity: 0.85,
    },
    Question {
        number: 17,
        domain: "Familiar",
        construct: "Armonía trabajo–vida",
        kind: Organizational,
        text: "¿La empresa respeta tus horarios y límites personales fuera del trabajo?",
        weight: 0.6,
        severity: 0.85,
    },
    Question {
        number: 18,
        domain: "Familiar",
        construct: "Soporte del entorno",
        kind: Personal,
        text: "¿Sentís apoyo de tu entorno para cumplir tus responsabilidades laborales?",
        weight: 0.4,
        severity: 0.7,
    },
    Question {
        number: 19,
        domain: "Familiar",
        construct: "Soporte del entorno",
        kind: Organizational,
        text: "¿La empresa comprende y acompaña situaciones personales cuando es necesario?",
        weight: 0.4,
        severity: 0.7,
    },
    Question {
        number: 20,
        domain: "Económico",
        construct: "Seguridad económica",
        kind: Personal,
        text: "¿Sentís tranquilidad en cómo manejás tus finanzas personales?",
        weight: 0.6,
        severity: 0.85,
    },
    Question {
        number: 21,
        domain: "Económico",
        construct: "Seguridad económica",
        kind: Organizational,
        text: "¿La estabilidad de tu ingreso te permite sentir tranquilidad mes a mes?",
        weight: 0.6,
        severity: 0.85,
    },
    Question {
        number: 22,
        domain: "Económico",
        construct: "Gestión económica personal",
        kind: Personal,
        text: "¿Tenés tus finanzas personales organizadas de manera clara?",
        weight: 0.4,
        severity: 0.8,
    },
    Question {
        number: 23,
        domain: "Económico",
        construct: "Gestión económica personal",
        kind: Organizational,
        text: "¿Recibís tu información salarial de forma clara y confiable?",
        weight: 0.4,
        severity: 0.8,
    },
];

#[derive(Clone, Debug, Serialize)]
pub struct ScoringConfig {
    pub scoring_method: &'static str,
    pub domains: Vec<DomainScoring>,
    pub thresholds: Thresholds,
}

#[derive(Clone, Debug, Serialize)]
pub struct DomainScoring {
    pub name: &'static str,
    pub weight: f64,
    pub questions: Vec<u32>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Thresholds {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub excellent: u32,
}

/// Builds the scoring configuration embedded in the survey row. Domains are
/// derived from the question set (first-appearance order), so the question
/// lists can never drift from the catalog.
pub fn scoring_config(questions: &[Question]) -> ScoringConfig {
    let mut domains: Vec<DomainScoring> = Vec::new();
    for question in questions {
        match domains.iter_mut().find(|d| d.name == question.domain) {
            Some(domain) => domain.questions.push(question.number),
            None => domains.push(DomainScoring {
                name: question.domain,
                weight: 1.0,
                questions: vec![question.number],
            }),
        }
    }
    ScoringConfig {
        scoring_method: "weighted_average",
        domains,
        thresholds: Thresholds {
            low: 0,
            medium: 5,
            high: 7,
            excellent: 9,
        },
    }
}
