// Prompt builders for the text-enhancement calls. The wording targets Italian CVs.

/// Context passed with the summary when the editor optimizes it.
pub const SUMMARY_CONTEXT: &str = "Profilo professionale per un programmatore e marketer";

pub fn optimize_prompt(text: &str, context: &str) -> String {
    format!(
        "Agisci come un esperto HR italiano. Ottimizza il seguente testo per un Curriculum Vitae professionale in Italia.\n\
         Contesto: {context}.\n\
         Testo originale: \"{text}\".\n\
         Rispondi solo con il testo ottimizzato in italiano formale."
    )
}

pub fn translate_prompt(text: &str) -> String {
    format!(
        "Traduci professionalmente in italiano per un CV: \"{text}\". Rispondi solo con la traduzione."
    )
}
