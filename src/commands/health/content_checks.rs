use super::*;

/// `correctIndex` must address the longest choices list across languages.
pub fn check_answer_bounds(questions: &[Question], findings: &mut Findings) {
    let mut offenders = Vec::new();

    for question in questions {
        let choice_count = question
            .choices
            .iter()
            .map(|(_, choices)| choices.len())
            .max()
            .unwrap_or(0);

        if choice_count == 0 {
            offenders.push(format!("{} (no choices)", question.display_id()));
            continue;
        }

        let in_range = question
            .correct_index
            .and_then(|index| usize::try_from(index).ok())
            .map(|index| index < choice_count)
            .unwrap_or(false);
        if !in_range {
            let shown = match question.correct_index {
                Some(index) => index.to_string(),
                None if question.correct_index_raw.is_empty() => "blank".to_string(),
                None => question.correct_index_raw.clone(),
            };
            offenders.push(format!(
                "{} (correctIndex={shown}, choices={choice_count})",
                question.display_id()
            ));
        }
    }

    if offenders.is_empty() {
        return;
    }

    findings.err(
        "BAD_CORRECT_INDEX",
        format!(
            "Questions with invalid correctIndex: {}",
            capped(&offenders).join(", ")
        ),
        sheet_details(EntityKind::Question.sheet_name(), &offenders),
    );
}

pub fn check_bilingual_titles(catalog: &Catalog, findings: &mut Findings) {
    check_bilingual(&catalog.domains, findings);
    check_bilingual(&catalog.modules, findings);
    check_bilingual(&catalog.courses, findings);
    check_bilingual(&catalog.lessons, findings);
    check_bilingual(&catalog.quizzes, findings);
    check_bilingual(&catalog.questions, findings);
}

fn check_bilingual<T: Entity>(entities: &[T], findings: &mut Findings) {
    let missing = entities
        .iter()
        .filter(|entity| !entity.titles().has_fr_and_en())
        .map(|entity| entity.display_id())
        .collect::<Vec<String>>();
    if missing.is_empty() {
        return;
    }

    let kind = T::KIND;
    findings.warn(
        kind.bilingual_code(),
        format!(
            "Some {} missing FR/EN {}: {}",
            kind.plural_label(),
            kind.title_stem(),
            capped(&missing).join(", ")
        ),
        sheet_details(kind.sheet_name(), &missing),
    );
}
