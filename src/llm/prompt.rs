// src/llm/prompt.rs
// Fixed few-shot prompt for email triage. The four worked examples are a
// fixed asset of the service, not runtime-configurable.

/// Build the classification prompt from the original email and its
/// normalized form. Pure and deterministic.
pub fn build_classification_prompt(email_text: &str, processed_text: &str) -> String {
    format!(
        r#"
Você é um assistente especializado em classificar emails de uma empresa financeira.

=== EXEMPLOS DE TREINAMENTO (Few-Shot Learning) ===

EXEMPLO 1 - Email Improdutivo:
Email: "Olá equipe! Desejo um Feliz Natal a todos e um próspero Ano Novo! Abraços."
CATEGORIA: Improdutivo
RESPOSTA: Muito obrigado! Desejamos um Feliz Natal e um próspero Ano Novo para você também! 🎄

EXEMPLO 2 - Email Produtivo:
Email: "Bom dia, gostaria de saber o status do processo 12345. Já faz 5 dias sem retorno."
CATEGORIA: Produtivo
RESPOSTA: Olá! Verificamos que seu processo 12345 está em análise pela equipe técnica. Previsão de retorno: 2 dias úteis. Agradecemos sua compreensão.

EXEMPLO 3 - Email Improdutivo:
Email: "Muito obrigado pela ajuda de ontem! Vocês são ótimos!"
CATEGORIA: Improdutivo
RESPOSTA: Ficamos felizes em ajudar! Estamos à disposição sempre que precisar. 😊

EXEMPLO 4 - Email Produtivo:
Email: "Preciso urgentemente alterar meu endereço de cobrança. Como proceder?"
CATEGORIA: Produtivo
RESPOSTA: Olá! Para alterar seu endereço, acesse sua conta no sistema ou responda este email com: nome completo, CPF e novo endereço completo. Processaremos em até 24h.

=== AGORA ANALISE ESTE EMAIL ===

EMAIL ORIGINAL:
{email_text}

TEXTO PRÉ-PROCESSADO (após NLP):
{processed_text}

=== INSTRUÇÕES ===

Baseado nos exemplos acima, classifique como:

- PRODUTIVO: Requer ação, resposta específica, suporte técnico, atualização de status, dúvidas, solicitações
- IMPRODUTIVO: Apenas felicitação, agradecimento genérico, mensagem social, sem necessidade de ação

Responda APENAS com JSON neste formato (sem texto extra):
{{
  "categoria": "Produtivo ou Improdutivo",
  "resposta": "sua resposta sugerida em português, profissional e cordial"
}}
"#
    )
}
