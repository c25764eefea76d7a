//! Built-in academic vocabulary thesaurus.

/// Forward entries: headword and its synonyms, in stored order.
pub(crate) const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("majority", &["most", "largest part", "main portion", "bulk", "greater part"]),
    ("energy", &["power", "fuel", "electricity", "strength", "vigor", "force"]),
    ("generated", &["produced", "created", "made", "manufactured", "formed", "yielded"]),
    ("electricity", &["power", "electrical energy", "current", "voltage", "electric power"]),
    ("increase", &["rise", "grow", "expand", "boost", "enhance", "improve"]),
    ("decrease", &["reduce", "decline", "drop", "fall", "lower", "diminish"]),
    (
        "significant",
        &["important", "major", "considerable", "substantial", "notable", "meaningful"],
    ),
    ("research", &["study", "investigation", "analysis", "examination", "survey", "exploration"]),
    (
        "development",
        &["growth", "progress", "advancement", "evolution", "improvement", "expansion"],
    ),
    ("environment", &["surroundings", "habitat", "ecosystem", "nature", "conditions", "context"]),
    ("technology", &["innovation", "advancement", "machinery", "equipment", "tools", "systems"]),
    ("education", &["learning", "schooling", "instruction", "teaching", "training", "knowledge"]),
    ("economy", &["financial system", "economics", "market", "trade", "commerce", "industry"]),
    ("health", &["wellness", "fitness", "medical", "healthcare", "condition", "well-being"]),
    (
        "population",
        &["inhabitants", "residents", "people", "citizens", "community", "demographics"],
    ),
    ("climate", &["weather", "conditions", "atmosphere", "environment", "temperature", "seasons"]),
    ("transport", &["transportation", "travel", "movement", "transit", "conveyance", "traffic"]),
    ("industry", &["manufacturing", "production", "business", "commerce", "trade", "sector"]),
    (
        "agriculture",
        &["farming", "cultivation", "harvesting", "crop production", "land management"],
    ),
    ("communication", &["interaction", "contact", "exchange", "correspondence", "connection"]),
    ("information", &["data", "knowledge", "facts", "details", "intelligence", "material"]),
    ("problem", &["issue", "challenge", "difficulty", "obstacle", "concern", "matter"]),
    ("solution", &["answer", "resolution", "fix", "remedy", "approach", "method"]),
    ("benefit", &["advantage", "gain", "profit", "improvement", "value", "merit"]),
    ("disadvantage", &["drawback", "limitation", "weakness", "con", "negative aspect"]),
    ("effect", &["impact", "result", "consequence", "outcome", "influence", "repercussion"]),
    ("cause", &["reason", "source", "origin", "factor", "basis", "root"]),
    ("process", &["procedure", "method", "system", "approach", "technique", "operation"]),
    ("factor", &["element", "component", "aspect", "consideration", "variable", "feature"]),
    ("level", &["standard", "degree", "grade", "rank", "status", "position"]),
    ("rate", &["speed", "pace", "frequency", "ratio", "proportion", "percentage"]),
    ("amount", &["quantity", "volume", "number", "total", "sum", "measure"]),
    ("quality", &["standard", "caliber", "grade", "condition", "characteristic", "feature"]),
    ("method", &["approach", "technique", "procedure", "system", "way", "strategy"]),
    ("system", &["structure", "framework", "organization", "arrangement", "network", "scheme"]),
    ("policy", &["rule", "regulation", "guideline", "approach", "strategy", "procedure"]),
    (
        "change",
        &["transformation", "modification", "alteration", "shift", "variation", "adjustment"],
    ),
    ("improvement", &["enhancement", "progress", "advancement", "development", "upgrade"]),
    ("reduction", &["decrease", "cut", "lowering", "diminishment", "decline", "drop"]),
    ("analysis", &["examination", "study", "investigation", "review", "assessment", "evaluation"]),
    ("comparison", &["contrast", "evaluation", "assessment", "review", "examination"]),
    ("relationship", &["connection", "link", "association", "correlation", "interaction"]),
    ("purpose", &["aim", "goal", "objective", "intention", "function", "reason"]),
    ("function", &["role", "purpose", "job", "task", "operation", "activity"]),
    ("feature", &["characteristic", "attribute", "quality", "aspect", "element", "property"]),
    ("aspect", &["feature", "characteristic", "element", "facet", "dimension", "quality"]),
    ("element", &["component", "factor", "feature", "aspect", "part", "ingredient"]),
    ("component", &["part", "element", "factor", "feature", "aspect", "section"]),
    ("resource", &["supply", "material", "source", "asset", "reserve", "stock"]),
    ("material", &["substance", "matter", "fabric", "stuff", "element", "component"]),
    ("product", &["item", "good", "commodity", "output", "result", "creation"]),
    ("service", &["facility", "amenity", "offering", "provision", "supply", "assistance"]),
    ("activity", &["action", "operation", "process", "function", "task", "work"]),
    ("operation", &["activity", "process", "procedure", "function", "action", "work"]),
    ("management", &["administration", "control", "supervision", "direction", "leadership"]),
    ("organization", &["structure", "system", "arrangement", "management", "administration"]),
    ("structure", &["organization", "system", "arrangement", "framework", "construction"]),
    ("framework", &["structure", "system", "organization", "scheme", "outline", "plan"]),
    ("strategy", &["plan", "approach", "method", "tactic", "scheme", "policy"]),
    ("approach", &["method", "strategy", "way", "technique", "procedure", "system"]),
    ("technique", &["method", "approach", "procedure", "system", "way", "strategy"]),
    ("skill", &["ability", "capability", "competence", "expertise", "talent", "proficiency"]),
    ("ability", &["skill", "capability", "capacity", "competence", "talent", "power"]),
    ("knowledge", &["information", "understanding", "awareness", "expertise", "learning"]),
    ("experience", &["practice", "knowledge", "skill", "background", "history", "exposure"]),
    ("opportunity", &["chance", "possibility", "prospect", "opening", "occasion", "option"]),
    ("challenge", &["difficulty", "problem", "obstacle", "test", "trial", "struggle"]),
    ("success", &["achievement", "accomplishment", "victory", "triumph", "win", "progress"]),
    ("failure", &["defeat", "loss", "setback", "disappointment", "unsuccessful result"]),
    ("risk", &["danger", "threat", "hazard", "peril", "uncertainty", "exposure"]),
    ("safety", &["security", "protection", "welfare", "well-being", "defense", "shelter"]),
    ("security", &["safety", "protection", "defense", "security measures", "safeguards"]),
    ("protection", &["defense", "shielding", "safeguarding", "security", "preservation"]),
    ("preservation", &["conservation", "protection", "maintenance", "saving", "upkeep"]),
    ("conservation", &["preservation", "protection", "saving", "maintenance", "upkeep"]),
    ("maintenance", &["upkeep", "preservation", "care", "support", "service", "repair"]),
    ("support", &["assistance", "help", "aid", "backing", "endorsement", "encouragement"]),
    ("assistance", &["help", "support", "aid", "service", "backing", "cooperation"]),
    ("cooperation", &["collaboration", "partnership", "teamwork", "joint effort", "coordination"]),
    ("collaboration", &["cooperation", "partnership", "teamwork", "joint effort", "coordination"]),
    ("partnership", &["collaboration", "cooperation", "alliance", "association", "joint venture"]),
    ("teamwork", &["collaboration", "cooperation", "joint effort", "coordination", "partnership"]),
    ("coordination", &["cooperation", "collaboration", "organization", "management", "harmony"]),
    ("harmony", &["agreement", "balance", "coordination", "cooperation", "unity", "peace"]),
    ("balance", &["equilibrium", "stability", "harmony", "proportion", "symmetry", "equality"]),
    ("stability", &["steadiness", "security", "firmness", "reliability", "consistency"]),
    ("consistency", &["regularity", "uniformity", "steadiness", "reliability", "constancy"]),
    (
        "reliability",
        &["dependability", "trustworthiness", "consistency", "stability", "steadiness"],
    ),
    ("efficiency", &["effectiveness", "productivity", "performance", "capability", "competence"]),
    ("effectiveness", &["efficiency", "success", "productivity", "performance", "capability"]),
    ("productivity", &["efficiency", "output", "performance", "effectiveness", "capability"]),
    ("performance", &["productivity", "achievement", "effectiveness", "efficiency", "success"]),
    ("achievement", &["success", "accomplishment", "attainment", "performance", "result"]),
    ("accomplishment", &["achievement", "success", "attainment", "performance", "result"]),
    ("attainment", &["achievement", "accomplishment", "success", "performance", "result"]),
    ("result", &["outcome", "consequence", "effect", "achievement", "performance", "success"]),
    ("outcome", &["result", "consequence", "effect", "achievement", "performance", "success"]),
    ("consequence", &["result", "outcome", "effect", "impact", "repercussion", "implication"]),
    ("impact", &["effect", "consequence", "outcome", "result", "influence", "repercussion"]),
    ("influence", &["impact", "effect", "consequence", "outcome", "result", "repercussion"]),
    ("repercussion", &["consequence", "effect", "impact", "outcome", "result", "implication"]),
    ("implication", &["consequence", "effect", "impact", "outcome", "result", "repercussion"]),
];
