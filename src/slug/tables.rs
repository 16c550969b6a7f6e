//! Built-in lookup tables for the 1024 techcamp corpus.
//!
//! Config files can add entries on top of these; see `config::types::MigrationConfig`.

/// Phrase dictionary: source phrase → English token.
///
/// `同学` is deliberately absent so greetings drop out of derived slugs.
pub fn builtin_dictionary() -> Vec<(&'static str, &'static str)> {
    vec![
        ("工程实践", "engineering-practice"),
        ("写代码", "coding"),
        ("第一步", "first-step"),
        ("为什么", "why"),
        ("建议", "suggest"),
        ("关注", "follow"),
        ("实训营", "techcamp"),
        ("工程师", "engineer"),
        ("核心竞争力", "core-competitiveness"),
        ("优秀", "excellent"),
        ("特质", "qualities"),
        ("一行之差", "one-line-difference"),
        ("文件末尾", "end-of-file"),
        ("空行", "newline"),
        ("类型系统", "type-system"),
        ("编译器", "compiler"),
        ("实现", "implementation"),
        ("辅助开发", "assisted-development"),
        ("新范式", "new-paradigm"),
        ("探索", "explore"),
        ("未来", "future"),
        ("时代", "era"),
        ("发展观", "development-perspective"),
        ("发布", "release"),
        ("全景图", "roadmap"),
        ("全民编程", "programming-for-all"),
        ("语言", "language"),
        ("合并", "merge"),
        ("三选一", "three-options"),
        ("主分支", "main-branch"),
        ("怎么选", "which-to-choose"),
        ("才算", "what-makes"),
        ("完成", "complete"),
        ("应用", "application"),
        ("理解", "understanding"),
        ("构建", "building"),
        ("多模态", "multimodal"),
        ("搜索服务", "search-service"),
        ("心得", "insights"),
        ("代码", "code"),
        ("核心", "core"),
        ("项目", "project"),
        ("产品开发", "product-development"),
        ("决策层次", "decision-layers"),
        ("快速集成", "rapid-integration"),
        ("生态", "ecosystem"),
        ("桥梁", "bridge"),
        ("绘图", "drawing"),
        ("融入", "integration"),
        ("产品", "product"),
        ("编译", "compilation"),
        ("运行时", "runtime"),
        ("集成", "integration"),
        ("依赖识别", "dependency-identification"),
        ("一键交付", "one-click-delivery"),
        ("架构设计", "architecture-design"),
        ("从何入手", "where-to-start"),
        ("认知体会", "insights"),
        ("几点", "several-points"),
        ("关于", "about"),
        ("把小事做好", "doing-small-things-well"),
        ("不是什么", "what-is-not"),
        ("聊", "on"),
    ]
}

/// Curated overrides. Keys are either full titles or the word-character
/// slugs an earlier migration produced from them.
pub fn builtin_overrides() -> Vec<(&'static str, &'static str)> {
    vec![
        // Full titles
        ("工程实践分享 | 把小事做好", "engineering-practice-doing-small-things-well"),
        ("工程实践分享｜\"写代码\"不是第一步！", "engineering-practice-coding-is-not-first-step"),
        ("同学，为什么我建议你关注 1024 实训营？", "why-you-should-join-1024-techcamp"),
        ("当 AI 能写代码，工程师的核心竞争力是什么？", "engineer-core-competitiveness-in-ai-era"),
        ("我眼中的优秀工程师特质", "qualities-of-excellent-engineers"),
        ("一行之差：为什么你的文件末尾应该留一个空行？", "why-end-files-with-newline"),
        ("从类型系统看XGo编译器的实现", "understanding-xgo-compiler-through-type-system"),
        ("AI辅助开发新范式：1024实训营带你探索未来", "ai-assisted-development-new-paradigm-with-techcamp"),
        ("许式伟聊AI时代下的工程师发展观", "xu-shiwei-on-engineer-development-in-ai-era"),
        ("许式伟发布 XGo 全景图：AI 时代的全民编程语言", "xu-shiwei-releases-xgo-roadmap-programming-for-all-in-ai-era"),
        ("GitHub PR 合并三选一：主分支该怎么选？", "github-pr-merge-strategies-which-to-choose"),
        ("如何才算\"完成\"一个AI应用", "what-makes-ai-application-complete"),
        ("从类型系统理解 LLGo 编译器的实现", "understanding-llgo-compiler-through-type-system"),
        ("Code Review 不是什么——盘点5个常见误区", "what-code-review-is-not"),
        ("架构设计从何入手？", "where-to-start-architecture-design"),
        ("关于架构设计的几点认知体会", "insights-on-architecture-design"),
        ("SPX-Algorithm：构建多模态搜索服务的一些心得", "spx-algorithm-building-multimodal-search-service"),
        ("代码不是核心：从 XLink 项目看产品开发的决策层次", "code-is-not-core-decision-layers-in-xlink-project"),
        ("llpyg: LLGo 快速集成 Python 生态的桥梁", "llpyg-bridge-for-llgo-python-integration"),
        ("X绘图-我们是如何让AI更好的融入我们的产品的", "xdraw-how-to-integrate-ai-into-products"),
        ("X绘图：我们如何让 AI 更好地融入产品", "xdraw-how-to-integrate-ai-into-products"),
        ("LLGo 中 Python 编译与运行时集成：从依赖识别到一键交付", "llgo-python-compilation-and-runtime-integration"),
        ("LLGo 中 Python 编译与运行时集成", "llgo-python-compilation-and-runtime-integration"),
        // Slugs left behind by the word-character migration
        ("工程实践分享-把小事做好", "engineering-practice-doing-small-things-well"),
        ("工程实践分享写代码不是第一步", "engineering-practice-coding-is-not-first-step"),
        ("同学为什么我建议你关注-1024-实训营", "why-you-should-join-1024-techcamp"),
        ("当-ai-能写代码工程师的核心竞争力是什么", "engineer-core-competitiveness-in-ai-era"),
        ("一行之差为什么你的文件末尾应该留一个空行", "why-end-files-with-newline"),
        ("从类型系统理解-xgo-编译器的实现", "understanding-xgo-compiler-through-type-system"),
        ("ai-重构软件开发从工具到规则的范式革命", "ai-reshaping-software-development-paradigm-shift"),
        ("许式伟聊-ai-时代下的工程师发展观", "xu-shiwei-on-engineer-development-in-ai-era"),
        ("许式伟发布-xgo-全景图ai-时代的全民编程语言", "xu-shiwei-releases-xgo-roadmap-programming-for-all"),
        ("github-pr-合并三选一主分支该怎么选", "github-pr-merge-strategies-which-to-choose"),
        ("如何才算完成一个ai应用", "what-makes-ai-application-complete"),
        ("从类型系统理解-llgo-编译器的实现", "understanding-llgo-compiler-through-type-system"),
        ("code-review-不是什么", "what-code-review-is-not"),
        ("架构设计该从何入手", "where-to-start-architecture-design"),
        ("spx-algorithm构建多模态搜索服务的一些心得", "spx-algorithm-building-multimodal-search-service"),
        ("代码不是核心从-xlink-项目看产品开发的决策层次", "code-is-not-core-decision-layers-in-xlink-project"),
        ("llpyg-llgo-快速集成-python-生态的桥梁", "llpyg-bridge-for-llgo-python-integration"),
        ("x绘图-让ai融入产品", "xdraw-integrating-ai-into-products"),
        ("让ai融入产品", "integrating-ai-into-products"),
        ("x绘图-我们是如何让AI更好的融入我们的产品的", "xdraw-integrating-ai-into-products"),
        ("llgo-python-编译与运行时集成", "llgo-python-compilation-and-runtime-integration"),
    ]
}
