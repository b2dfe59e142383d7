//! Supported response languages and their prompt bundles.
//!
//! Each language carries a complete set of literal phrases, so prompts are
//! assembled without any translation at request time. Lookup by code is an
//! exact match; anything unrecognized falls back to English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A response language the consulting prompts are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
    Ja,
    Zh,
    Es,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Ko,
        Language::Ja,
        Language::Zh,
        Language::Es,
    ];

    /// Resolves a language code, falling back to English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .unwrap_or_default()
    }

    /// The language code, e.g. `ko`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
            Self::Ja => "ja",
            Self::Zh => "zh",
            Self::Es => "es",
        }
    }

    /// The prompt bundle for this language.
    #[must_use]
    pub fn bundle(self) -> &'static PromptBundle {
        match self {
            Self::En => &EN,
            Self::Ko => &KO,
            Self::Ja => &JA,
            Self::Zh => &ZH,
            Self::Es => &ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Literal phrases used to assemble consulting prompts in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    /// Consultant persona, including the response-language requirement.
    pub persona: &'static str,
    /// Opening request line.
    pub request: &'static str,
    /// Role label for the benchmark video block.
    pub benchmark_label: &'static str,
    /// Role label for the user's video block.
    pub user_label: &'static str,
    /// Suffix after the role label in a video block heading.
    pub details_label: &'static str,
    pub labels: VideoDataLabels,
    pub blueprint_task: BlueprintTask,
    pub comparative_task: ComparativeTask,
    /// Instruction for expanding an outline into a full script.
    pub full_script: &'static str,
    /// Instruction for splitting an outline into storyboard scenes.
    pub storyboard: &'static str,
}

/// Field labels inside a video detail block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDataLabels {
    pub title: &'static str,
    pub views: &'static str,
    pub likes: &'static str,
    pub description: &'static str,
    pub tags: &'static str,
}

/// Task list for benchmark-only consulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintTask {
    pub heading: &'static str,
    pub analyze: &'static str,
    pub blueprint: &'static str,
}

/// Task list for benchmark-versus-user consulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparativeTask {
    pub heading: &'static str,
    pub analyze: &'static str,
    pub compare: &'static str,
    pub advise: &'static str,
}

impl PromptBundle {
    /// Names of fields that are empty or whitespace-only.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("persona", self.persona),
            ("request", self.request),
            ("benchmark_label", self.benchmark_label),
            ("user_label", self.user_label),
            ("details_label", self.details_label),
            ("labels.title", self.labels.title),
            ("labels.views", self.labels.views),
            ("labels.likes", self.labels.likes),
            ("labels.description", self.labels.description),
            ("labels.tags", self.labels.tags),
            ("blueprint_task.heading", self.blueprint_task.heading),
            ("blueprint_task.analyze", self.blueprint_task.analyze),
            ("blueprint_task.blueprint", self.blueprint_task.blueprint),
            ("comparative_task.heading", self.comparative_task.heading),
            ("comparative_task.analyze", self.comparative_task.analyze),
            ("comparative_task.compare", self.comparative_task.compare),
            ("comparative_task.advise", self.comparative_task.advise),
            ("full_script", self.full_script),
            ("storyboard", self.storyboard),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

static EN: PromptBundle = PromptBundle {
    persona: "You are a world-class YouTube growth consultant with 20 years of experience at McKinsey, specializing in viral video strategy. Your analysis is sharp, actionable, and data-driven. Your response must be in English.",
    request: "I need a deep analysis of the following video(s).",
    benchmark_label: "Benchmark Video",
    user_label: "User's Video",
    details_label: "Video Details",
    labels: VideoDataLabels {
        title: "Title",
        views: "Views",
        likes: "Likes",
        description: "Description",
        tags: "Tags",
    },
    blueprint_task: BlueprintTask {
        heading: "**Task:**",
        analyze: "1.  **Analyze Benchmark Video:** Deeply analyze the benchmark video's title hook, content strategy, target audience, and monetization potential.",
        blueprint: "2.  **Create a New Video Blueprint:** Based on the analysis, create a complete blueprint for a NEW video that could achieve similar or greater success. This blueprint must include:\n    - 3 alternative, catchy titles.\n    - A full, SEO-optimized description.\n    - A list of 10-15 relevant tags.\n    - A structured script outline (Hook, Intro, Main Points, CTA, Outro).\n    - 2 detailed thumbnail concepts.",
    },
    comparative_task: ComparativeTask {
        heading: "**Task:**",
        analyze: "1.  **Analyze Benchmark Video:** Briefly analyze the benchmark video's title hook, content strategy, target audience, and monetization potential.",
        compare: "2.  **Comparative Analysis:** Compare the user's video to the benchmark. Identify the single biggest strength and weakness for each.",
        advise: "3.  **Provide Actionable Advice:** Give concrete improvement suggestions for the user's video title, thumbnail, and content based on the benchmark's success. Your goal is to provide a clear path for the user to improve their video's performance.",
    },
    full_script: "You are a professional YouTube scriptwriter. Based on the following video title and script outline, write a complete, engaging, and detailed script for an 8-10 minute video. Include spoken lines, camera shot suggestions (e.g., 'close-up', 'wide shot'), and on-screen text/graphics callouts. The script must be in English.",
    storyboard: "You are a creative director. Based on the following video title and script outline, break the video down into 4 key visual scenes for a compelling storyboard. For each scene, provide a short title and a detailed, descriptive prompt for an AI image generator. The prompt should describe the setting, characters, mood, and camera angle. Your response must be in English.",
};

static KO: PromptBundle = PromptBundle {
    persona: "당신은 20년 경력의 맥킨지 출신 세계 최고 수준의 유튜브 성장 컨설턴트이며, 바이럴 영상 전략을 전문으로 합니다. 당신의 분석은 날카롭고, 실행 가능하며, 데이터에 기반합니다. 응답은 반드시 한국어로 작성되어야 합니다.",
    request: "다음 영상(들)에 대한 심층 분석이 필요합니다.",
    benchmark_label: "벤치마크 영상",
    user_label: "사용자 영상",
    details_label: "상세 정보",
    labels: VideoDataLabels {
        title: "제목",
        views: "조회수",
        likes: "좋아요",
        description: "설명",
        tags: "태그",
    },
    blueprint_task: BlueprintTask {
        heading: "**과제:**",
        analyze: "1.  **벤치마크 영상 분석:** 벤치마크 영상의 제목 후크, 콘텐츠 전략, 타겟 고객, 수익화 잠재력을 심층 분석하세요.",
        blueprint: "2.  **새로운 영상 기획안 제작:** 분석을 바탕으로, 비슷하거나 더 큰 성공을 거둘 수 있는 새로운 영상의 완전한 기획안을 만드세요. 이 기획안에는 다음이 포함되어야 합니다:\n    - 3개의 대안적이고 눈길을 끄는 제목.\n    - 완전하고 SEO에 최적화된 설명.\n    - 10-15개의 관련 태그 목록.\n    - 구조화된 스크립트 개요 (후크, 도입, 요점, CTA, 아웃트로).\n    - 2개의 상세한 썸네일 콘셉트.",
    },
    comparative_task: ComparativeTask {
        heading: "**과제:**",
        analyze: "1.  **벤치마크 영상 분석:** 벤치마크 영상의 제목 후크, 콘텐츠 전략, 타겟 고객, 수익화 잠재력을 간략히 분석하세요.",
        compare: "2.  **비교 분석:** 사용자의 영상을 벤치마크 영상과 비교하세요. 각각의 가장 큰 강점과 약점을 하나씩 파악하세요.",
        advise: "3.  **실행 가능한 조언 제공:** 벤치마크 영상의 성공을 바탕으로 사용자의 영상 제목, 썸네일, 콘텐츠에 대한 구체적인 개선 제안을 하세요. 당신의 목표는 사용자가 영상 성과를 개선할 수 있는 명확한 경로를 제공하는 것입니다.",
    },
    full_script: "당신은 전문 유튜브 스크립트 작가입니다. 다음 영상 제목과 스크립트 개요를 바탕으로, 8-10분 분량의 완전하고 흡입력 있는 상세 스크립트를 작성해주세요. 대사, 카메라 앵글 제안(예: '클로즈업', '와이드 샷'), 그리고 화면에 표시될 텍스트/그래픽 콜아웃을 포함해야 합니다. 스크립트는 반드시 한국어로 작성되어야 합니다.",
    storyboard: "당신은 크리에이티브 디렉터입니다. 다음 영상 제목과 스크립트 개요를 바탕으로, 영상을 매력적인 스토리보드로 만들 수 있는 4가지 핵심 시각적 장면으로 나누어 주세요. 각 장면에 대해 짧은 제목과 함께, AI 이미지 생성기를 위한 상세하고 구체적인 프롬프트를 제공해주세요. 프롬프트는 배경, 인물, 분위기, 카메라 앵글을 묘사해야 합니다. 응답은 반드시 한국어로 작성되어야 합니다.",
};

static JA: PromptBundle = PromptBundle {
    persona: "あなたはマッキンゼーで20年の経験を持つ世界クラスのYouTubeグロースコンサルタントであり、バイラル動画戦略を専門としています。あなたの分析は鋭く、実行可能で、データに基づいています。応答は必ず日本語でなければなりません。",
    request: "以下の動画の詳細な分析が必要です。",
    benchmark_label: "ベンチマーク動画",
    user_label: "ユーザーの動画",
    details_label: "動画詳細",
    labels: VideoDataLabels {
        title: "タイトル",
        views: "視聴回数",
        likes: "高評価",
        description: "説明",
        tags: "タグ",
    },
    blueprint_task: BlueprintTask {
        heading: "**タスク:**",
        analyze: "1.  **ベンチマーク動画の分析:** ベンチマーク動画のタイトルのフック、コンテンツ戦略、ターゲットオーディエンス、収益化の可能性を深く分析してください。",
        blueprint: "2.  **新しい動画の設計図を作成:** 分析に基づき、同様またはそれ以上の成功を収める可能性のある新しい動画の完全な設計図を作成してください。この設計図には、以下を含める必要があります：\n    - 3つのキャッチーな代替タイトル。\n    - SEOに最適化された完全な説明文。\n    - 10〜15個の関連タグのリスト。\n    - 構造化されたスクリプトの概要（フック、導入、要点、CTA、アウトロ）。\n    - 2つの詳細なサムネイルコンセプト。",
    },
    comparative_task: ComparativeTask {
        heading: "**タスク:**",
        analyze: "1.  **ベンチマーク動画の分析:** ベンチマーク動画のタイトルのフック、コンテンツ戦略、ターゲットオーディエンス、収益化の可能性を簡潔に分析してください。",
        compare: "2.  **比較分析:** ユーザーの動画とベンチマーク動画を比較します。それぞれの最大の長所と短所を1つずつ特定してください。",
        advise: "3.  **実行可能なアドバイスを提供:** ベンチマーク動画の成功に基づき、ユーザーの動画のタイトル、サムネイル、コンテンツに関する具体的な改善提案を行ってください。あなたの目標は、ユーザーが動画のパフォーマンスを向上させるための明確な道筋を提供することです。",
    },
    full_script: "あなたはプロのYouTubeスクリプトライターです。以下の動画タイトルとスクリプト概要に基づき、8〜10分の完全で魅力的な詳細スクリプトを作成してください。台詞、カメラショットの提案（例：「クローズアップ」、「ワイドショット」）、画面上のテキスト/グラフィックの指示を含める必要があります。スクリプトは必ず日本語で作成してください。",
    storyboard: "あなたはクリエイティブディレクターです。以下の動画タイトルとスクリプト概要に基づき、動画を魅力的なストーリーボードにするための4つの主要なビジュアルシーンに分割してください。各シーンについて、短いタイトルと、AI画像ジェネレーター用の詳細で記述的なプロンプトを提供してください。プロンプトは、設定、キャラクター、雰囲気、カメラアングルを説明する必要があります。応答は必ず日本語でなければなりません。",
};

static ZH: PromptBundle = PromptBundle {
    persona: "您是一位世界级的YouTube增长顾问，在麦肯锡拥有20年经验，专注于病毒式视频策略。您的分析敏锐、可操作且以数据为驱动。您的回复必须使用简体中文。",
    request: "我需要对以下视频进行深入分析。",
    benchmark_label: "基准视频",
    user_label: "用户的视频",
    details_label: "视频详情",
    labels: VideoDataLabels {
        title: "标题",
        views: "观看次数",
        likes: "点赞数",
        description: "描述",
        tags: "标签",
    },
    blueprint_task: BlueprintTask {
        heading: "**任务:**",
        analyze: "1.  **分析基准视频:** 深入分析基准视频的标题吸引点、内容策略、目标受众和变现潜力。",
        blueprint: "2.  **创建新视频蓝图:** 基于分析，为可能取得类似或更大成功的新视频创建一个完整的蓝图。此蓝图必须包括：\n    - 3个备选的、吸引人的标题。\n    - 完整的、经过SEO优化的描述。\n    - 包含10-15个相关标签的列表。\n    - 结构化的脚本大纲（钩子、引言、要点、号召性用语、结尾）。\n    - 2个详细的缩略图概念。",
    },
    comparative_task: ComparativeTask {
        heading: "**任务:**",
        analyze: "1.  **分析基准视频:** 简要分析基准视频的标题吸引点、内容策略、目标受众和变现潜力。",
        compare: "2.  **比较分析:** 将用户的视频与基准视频进行比较。找出各自最大的一个优点和一个缺点。",
        advise: "3.  **提供可行的建议:** 根据基准视频的成功经验，为用户的视频标题、缩略图和内容提供具体的改进建议。您的目标是为用户提供一条清晰的路径，以提高其视频性能。",
    },
    full_script: "您是一位专业的YouTube剧本作家。根据以下视频标题和剧本大纲，为一段8-10分钟的视频编写一个完整、引人入胜且详细的剧本。包括口语对话、摄像机镜头建议（例如，“特写”、“广角镜头”）以及屏幕上的文本/图形标注。剧本必须使用简体中文。",
    storyboard: "您是一位创意总监。根据以下视频标题和剧本大纲，将视频分解为4个关键视觉场景，以制作引人注目的故事板。为每个场景提供一个简短的标题和一个详细的、描述性的提示，供AI图像生成器使用。该提示应描述场景、角色、情绪和摄像机角度。您的回复必须使用简体中文。",
};

static ES: PromptBundle = PromptBundle {
    persona: "Eres un consultor de crecimiento en YouTube de talla mundial con 20 años de experiencia en McKinsey, especializado en estrategia de videos virales. Tu análisis es agudo, práctico y basado en datos. Tu respuesta debe estar en español.",
    request: "Necesito un análisis profundo del siguiente video (o videos).",
    benchmark_label: "Video de referencia",
    user_label: "Video del usuario",
    details_label: "Detalles del video",
    labels: VideoDataLabels {
        title: "Título",
        views: "Visualizaciones",
        likes: "Me gusta",
        description: "Descripción",
        tags: "Etiquetas",
    },
    blueprint_task: BlueprintTask {
        heading: "**Tarea:**",
        analyze: "1.  **Analiza el video de referencia:** Analiza en profundidad el gancho del título, la estrategia de contenido, la audiencia objetivo y el potencial de monetización del video de referencia.",
        blueprint: "2.  **Crea el plan de un nuevo video:** Con base en el análisis, crea un plan completo para un video NUEVO que pueda lograr un éxito similar o mayor. El plan debe incluir:\n    - 3 títulos alternativos y atractivos.\n    - Una descripción completa optimizada para SEO.\n    - Una lista de 10-15 etiquetas relevantes.\n    - Un esquema de guion estructurado (gancho, introducción, puntos principales, llamada a la acción, cierre).\n    - 2 conceptos detallados de miniatura.",
    },
    comparative_task: ComparativeTask {
        heading: "**Tarea:**",
        analyze: "1.  **Analiza el video de referencia:** Analiza brevemente el gancho del título, la estrategia de contenido, la audiencia objetivo y el potencial de monetización del video de referencia.",
        compare: "2.  **Análisis comparativo:** Compara el video del usuario con el de referencia. Identifica la mayor fortaleza y la mayor debilidad de cada uno.",
        advise: "3.  **Ofrece consejos prácticos:** Da sugerencias concretas para mejorar el título, la miniatura y el contenido del video del usuario a partir del éxito del video de referencia. Tu objetivo es ofrecer un camino claro para que el usuario mejore el rendimiento de su video.",
    },
    full_script: "Eres un guionista profesional de YouTube. A partir del siguiente título y esquema de guion, escribe un guion completo, atractivo y detallado para un video de 8-10 minutos. Incluye los diálogos, sugerencias de planos de cámara (p. ej., 'primer plano', 'plano general') y textos o gráficos en pantalla. El guion debe estar en español.",
    storyboard: "Eres un director creativo. A partir del siguiente título y esquema de guion, divide el video en 4 escenas visuales clave para un storyboard atractivo. Para cada escena, proporciona un título corto y un prompt detallado y descriptivo para un generador de imágenes con IA. El prompt debe describir el escenario, los personajes, el ambiente y el ángulo de cámara. Tu respuesta debe estar en español.",
};
