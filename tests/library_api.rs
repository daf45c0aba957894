//! Public API contract: prompt assembly and the response workflow.

use phase_prompt::{
    ActivityAction, Actor, ActorId, ActorRole, AppContext, AppError, CreateProjectRequest, Field,
    FormSubmission, GenerateRequest, MemoryStore, Phase, PhaseDefinition, PhaseId, PromptChunk,
    assemble, assemble_phase, create_project, generate_response, list_activity, list_projects,
    list_responses,
};

fn chunks() -> Vec<PromptChunk> {
    vec![
        PromptChunk::new("Introduce tu idea: ", 0),
        PromptChunk::new(" con enfoque en: ", 1),
        PromptChunk::new(" resultado esperado.", 2),
    ]
}

fn fields() -> Vec<Field> {
    vec![Field::new("campo_1", 0), Field::new("campo_2", 1)]
}

#[test]
fn all_fields_supplied() {
    let form =
        FormSubmission::new().with_value("campo_1", "Mi idea").with_value("campo_2", "sostenible");
    assert_eq!(
        assemble(&chunks(), &fields(), &form),
        "Introduce tu idea: Mi idea con enfoque en: sostenible resultado esperado."
    );
}

#[test]
fn empty_form() {
    assert_eq!(
        assemble(&chunks(), &fields(), &FormSubmission::new()),
        "Introduce tu idea:  con enfoque en:  resultado esperado."
    );
}

#[test]
fn optional_chunk_with_absent_field() {
    let mut chunks = chunks();
    chunks[1].is_optional = true;
    let form = FormSubmission::new().with_value("campo_1", "Mi idea");

    assert_eq!(
        assemble(&chunks, &fields(), &form),
        "Introduce tu idea: Mi idea resultado esperado."
    );
}

#[test]
fn optional_chunk_with_present_field() {
    let mut chunks = chunks();
    chunks[1].is_optional = true;
    let form = FormSubmission::new().with_value("campo_2", "x");

    assert_eq!(
        assemble(&chunks, &fields(), &form),
        "Introduce tu idea:  con enfoque en: x resultado esperado."
    );
}

#[test]
fn more_chunks_than_fields() {
    let form = FormSubmission::new().with_value("campo_1", "Mi idea");
    assert_eq!(
        assemble(&chunks(), &fields()[..1], &form),
        "Introduce tu idea: Mi idea con enfoque en:  resultado esperado."
    );
}

#[test]
fn empty_definition() {
    assert_eq!(assemble(&[], &[], &FormSubmission::new()), "");
    assert_eq!(assemble_phase(&PhaseDefinition::default(), &FormSubmission::new()), "");
}

#[test]
fn form_json_drives_assembly() {
    let definition = PhaseDefinition::new(chunks(), fields());
    let json = r#"{"campo_1": "Idea", "campo_2": null, "extra": true}"#;
    let form = FormSubmission::from_json(json).unwrap();

    assert_eq!(
        assemble_phase(&definition, &form),
        "Introduce tu idea: Idea con enfoque en:  resultado esperado."
    );
}

#[test]
fn response_workflow_stores_prompt_and_audits() {
    let store = MemoryStore::new();
    let owner = Actor::new(ActorId::new(7), "consumer_user", ActorRole::Consumer)
        .with_ip("127.0.0.1".parse().unwrap());
    let admin = Actor::new(ActorId::new(1), "admin_user", ActorRole::Administrator);
    let definition = PhaseDefinition::new(chunks(), fields());
    store.insert_phase(Phase::new(PhaseId::new(10), "Ideación", definition));
    let ctx = AppContext::new(store.clone(), store.clone(), store);

    let project = create_project(
        &ctx,
        &owner,
        CreateProjectRequest { name: "Proyecto Solar".into(), description: None },
    )
    .unwrap();
    assert_eq!(list_projects(&ctx, &owner).unwrap(), vec![project.clone()]);
    assert!(list_projects(&ctx, &admin).unwrap().is_empty());

    let response = generate_response(
        &ctx,
        &owner,
        GenerateRequest {
            project: project.id,
            phase: PhaseId::new(10),
            form_data: FormSubmission::new().with_value("campo_1", "Paneles"),
        },
    )
    .unwrap();

    assert_eq!(
        response.generated_prompt,
        "Introduce tu idea: Paneles con enfoque en:  resultado esperado."
    );
    assert_eq!(list_responses(&ctx, &owner).unwrap().len(), 1);
    assert!(list_responses(&ctx, &admin).unwrap().is_empty());

    let activity = list_activity(&ctx, &admin).unwrap();
    let actions: Vec<_> = activity.iter().map(|entry| entry.action).collect();
    assert_eq!(actions.len(), 2);
    assert!(actions.contains(&ActivityAction::CreateProject));
    let generated = activity
        .iter()
        .find(|entry| entry.action == ActivityAction::GeneratePrompt)
        .unwrap();
    assert_eq!(
        generated.details,
        "Prompt generado para fase: Ideación en proyecto: Proyecto Solar"
    );
    assert!(activity.iter().all(|entry| entry.ip_address == owner.ip_address));
    assert!(matches!(list_activity(&ctx, &owner), Err(AppError::PermissionDenied(_))));
}
