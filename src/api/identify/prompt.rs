//! Fixed instruction sent to the vision model

/// Identification prompt, identical for every request
///
/// The example part names steer the model without constraining it to a
/// closed set; the answer is free text. The instruction pins the output
/// contract: strictly one JSON object with the keys `pecaIdentificada`
/// and `modeloVeiculo`, `null` when an attribute cannot be determined,
/// and nothing besides the object.
pub const IDENTIFY_PROMPT: &str = "\
Analise a imagem focando na peça de veículo em destaque.
Sua tarefa é identificar duas coisas:
1. A peça principal na imagem (ex: \"retrovisor direito\", \"pneu dianteiro\", \"para-choque\", \"farol\", \"porta do motorista\").
2. O modelo e a marca do veículo ao qual a peça pertence (ex: \"Honda Civic\", \"Fiat Strada\", \"Hyundai HB20\").

Formate sua resposta final estritamente como um objeto JSON com duas chaves:
- \"pecaIdentificada\": uma string com o nome da peça (ex: \"Retrovisor direito\").
- \"modeloVeiculo\": uma string com a marca e modelo do veículo (ex: \"Honda Civic\").

Se não conseguir identificar a peça ou o modelo do veículo, o valor da chave correspondente deve ser null.
Não inclua nada na sua resposta além do objeto JSON.";
