// Prompt text for tag generation. The audience is a Spanish-speaking sourcing
// team, so the instructions are written in Spanish.
//
// None of these constants may contain the hash character: the generated terms
// are pasted into tools where it has its own meaning.

/// Role-setting opener.
pub const PROMPT_HEADER: &str = "Eres un *Talent Sourcer* experto en LinkedIn Recruiter que trabaja \
para un equipo de Recursos Humanos. Se te proporciona la descripción de una vacante dentro de las \
etiquetas <vacante>…</vacante>.\n\n";

/// Output categories. Replace `{max_titles}`, `{max_companies}` and `{max_keywords}`.
pub const OUTPUT_BLOCKS_TEMPLATE: &str = "Tu tarea es producir cinco bloques de términos que \
mejoren la búsqueda de candidatos en LinkedIn Recruiter:\n\
1. «cargos_es»: hasta {max_titles} títulos y sinónimos del puesto en **castellano**, de lo más \
específico a lo más general.\n\
2. «cargos_en»: hasta {max_titles} títulos equivalentes en **inglés** (traducciones o \
denominaciones habituales).\n\
3. «empresas»: hasta {max_companies} compañías relevantes donde suelan trabajar candidatos \
adecuados (mismo sector, tamaño o tecnologías).\n\
4. «palabras_clave_es»: hasta {max_keywords} keywords en **castellano** que describan \
habilidades, certificaciones y herramientas. Incluye booleanos usando **AND** / **OR** en \
mayúsculas cuando aporte valor.\n\
5. «palabras_clave_en»: hasta {max_keywords} keywords equivalentes en **inglés**.\n\n";

/// Formatting rules plus a minimal example of a compliant answer.
pub const FORMAT_RULES: &str = "REGLAS DE FORMATO\n\
• Devuelve la información **exclusivamente** en un objeto JSON plano, sin espacios externos y \
en una sola línea.\n\
• Estructura exacta del objeto:\n\
{\"cargos_es\":\"…\",\"cargos_en\":\"…\",\"empresas\":\"…\",\"palabras_clave_es\":\"…\",\"palabras_clave_en\":\"…\"}\n\
• Usa comas para separar valores. Sin numeraciones, viñetas ni comentarios.\n\
• No utilices el carácter almohadilla.\n\n\
EJEMPLO MÍNIMO\n\
{\"cargos_es\":\"Científico de Datos, Ingeniero de Machine Learning\",\"cargos_en\":\"Data \
Scientist, ML Engineer\",\"empresas\":\"Accenture, Deloitte, Capgemini\",\"palabras_clave_es\":\
\"Python AND TensorFlow, aprendizaje automático\",\"palabras_clave_en\":\"Python AND TensorFlow, \
machine learning\"}\n\n\
Genera la salida siguiendo estas reglas. A continuación se adjunta la vacante:\n";

pub const VACANCY_OPEN: &str = "<vacante>";
pub const VACANCY_CLOSE: &str = "</vacante>";
