// src/common/i18n.rs

// Catálogo de mensagens da API.
// As chaves são estáveis (usadas também como `message` nas validações);
// o texto depende do idioma vindo do Accept-Language.

pub const DEFAULT_LANG: &str = "en";

pub fn translate(lang: &str, key: &str) -> String {
    let text = match lang {
        "pt" => translate_pt(key),
        _ => None,
    };

    // Fallback: inglês, e se nem o inglês conhecer a chave, devolve a própria chave
    text.or_else(|| translate_en(key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

fn translate_en(key: &str) -> Option<&'static str> {
    let text = match key {
        "error.validation" => "One or more fields are invalid.",
        "error.missing_identity" => "Authenticated user header is missing.",
        "error.invalid_identity" => "Authenticated user header is not a valid id.",
        "error.store_not_found" => "Store not found.",
        "error.billboard_not_found" => "Billboard not found.",
        "error.store_has_dependents" => "Make sure you deleted all products and categories first",
        "error.billboard_in_use" => "Make sure you removed all categories using this billboard first.",
        "error.invalid_path" => "Invalid path parameter.",
        "error.invalid_query" => "Invalid query parameter.",
        "error.internal" => "Something went wrong.",

        "store.name.length" => "Store name is required (3 to 25 characters).",
        "billboard.label.required" => "Billboard label is required.",
        "billboard.image_url.invalid" => "Image URL must be a valid URL.",
        _ => return None,
    };
    Some(text)
}

fn translate_pt(key: &str) -> Option<&'static str> {
    let text = match key {
        "error.validation" => "Um ou mais campos são inválidos.",
        "error.missing_identity" => "O cabeçalho do usuário autenticado está em falta.",
        "error.invalid_identity" => "O cabeçalho do usuário autenticado não é um ID válido.",
        "error.store_not_found" => "Loja não encontrada.",
        "error.billboard_not_found" => "Billboard não encontrado.",
        "error.store_has_dependents" => "Remova todos os produtos e categorias antes de excluir a loja.",
        "error.billboard_in_use" => "Remova as categorias que usam este billboard antes de excluí-lo.",
        "error.invalid_path" => "Parâmetro de rota inválido.",
        "error.invalid_query" => "Parâmetro de query inválido.",
        "error.internal" => "Ocorreu um erro inesperado.",

        "store.name.length" => "O nome da loja é obrigatório (3 a 25 caracteres).",
        "billboard.label.required" => "O rótulo do billboard é obrigatório.",
        "billboard.image_url.invalid" => "A URL da imagem deve ser válida.",
        _ => return None,
    };
    Some(text)
}
