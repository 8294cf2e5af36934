use crate::catalog::{Question, Survey, scoring_config};

/// Emits the full seed migration for the base survey: the `surveys` row
/// (with the scoring configuration embedded as JSON) followed by a `DO`
/// block that looks the survey id back up and inserts every question.
///
/// The only fallible step is serializing the scoring configuration; the
/// rest is string assembly.
pub fn seed_sql(survey: &Survey, questions: &[Question]) -> Result<String, serde_json::Error> {
    let config = scoring_config(questions);
    let config_json = serde_json::to_string(&config)?;

    let mut out = String::new();
    out.push_str("-- Base survey seed migration\n");
    out.push_str("BEGIN;\n");

    out.push_str("\n-- 1. Insert the survey\n");
    out.push_str(
        "INSERT INTO surveys (code, name, description, survey_type, version, status, is_base, calculation_algorithm)\n",
    );
    out.push_str(&format!(
        "VALUES ({}, {}, {}, 'base', {}, 'active', true, {});\n",
        literal(survey.code),
        literal(survey.name),
        literal(survey.description),
        literal(survey.version),
        literal(&config_json),
    ));

    out.push_str("\n-- 2. Look the survey id back up\n");
    out.push_str("DO $$\n");
    out.push_str("DECLARE\n");
    out.push_str("    v_survey_id UUID;\n");
    out.push_str("BEGIN\n");
    out.push_str(&format!(
        "    SELECT id INTO v_survey_id FROM surveys WHERE code = {};\n",
        literal(survey.code)
    ));

    out.push_str("\n    -- 3. Insert the questions\n");
    for question in questions {
        out.push_str(
            "    INSERT INTO survey_questions (survey_id, question_number, domain, construct, question_type, question_text, weight, severity, personal_weight, org_weight, display_order)",
        );
        out.push_str(&format!(
            " VALUES (v_survey_id, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});\n",
            question.number,
            literal(question.domain),
            literal(question.construct),
            literal(question.kind.code()),
            literal(question.text),
            question.weight,
            question.severity,
            question.kind.personal_weight(),
            question.kind.org_weight(),
            question.number,
        ));
    }

    out.push_str("END $$;\n");
    out.push_str("\nCOMMIT;\n");
    Ok(out)
}

/// Quotes a SQL string literal, doubling embedded single quotes.
fn literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}
